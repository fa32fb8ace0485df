use confab::model::ModelCatalog;

pub fn list_models(catalog: &ModelCatalog) {
    for model in catalog.list() {
        println!("{} ({})", model.label, model.id);
    }
}
