use argh::FromArgs;
use legacy_asset_transform_file_formats_api::catalog::{CatalogEntry, ResourceCatalog};

#[derive(FromArgs, Debug)]
/// List the resources the extract command knows about
#[argh(subcommand, name = "catalog")]
pub struct CatalogCmd {}

pub fn handle_catalog_command(_cmd: CatalogCmd) {
    let catalog = ResourceCatalog::builtin();
    for entry in &catalog {
        println!("{}", format_entry(entry));
    }
    println!("\n{} resources", catalog.len());
}

fn format_entry(entry: &CatalogEntry) -> String {
    format!(
        "{:<20} {:<8} {:<8} {}",
        entry.resource_key,
        entry.category.dir_name(),
        format!("{:?}", entry.kind),
        entry.logical_name
    )
}
