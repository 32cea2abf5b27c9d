fn main() {
    walle::term::main();
}
