use tree_morph_engine::engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
