//! Browser entry point for the CSR bundle.

use quantum_workshop_site::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
