// Welcome to CodeScribe!
// Write your Rust code here
fn main() {
    println!("Hello, World!");
}
