fn main() {
  revshare::main();
}
