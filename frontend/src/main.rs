fn main() {
    // Trunk builds the bin target; the actual mount lives in the library so
    // the host test harness can compile the tree without a browser runtime.
    #[cfg(target_arch = "wasm32")]
    leavedesk_frontend::start();
}
