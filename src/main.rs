fn main() {
    treelit::cli::run();
}
