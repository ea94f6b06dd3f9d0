//! Browser entry point: start logging, then attach the landing page.

fn main() {
	wte_flow::init_logging();
	wte_flow::start();
}
