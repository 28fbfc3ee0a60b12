//! Format projections, map lists, and directory listings as text.

use crate::gateway::http::DirectoryListing;
use crate::types::AddOutcome;
use crate::views::{visible_rows, Icon, Projection};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::FolderClosed => "+",
        Icon::FolderOpen => "-",
        Icon::Model { textured: true } => "■",
        Icon::Model { textured: false } => "□",
    }
}

/// Format a projected tree, descending into expanded directories only.
pub fn format_tree<A>(title: &str, projection: &Projection<A>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(title)));
    if projection.nodes.is_empty() {
        out.push_str("No models.\n");
        return out;
    }
    for (depth, node) in visible_rows(&projection.nodes) {
        out.push_str(&format!(
            "{}{} {}\n",
            "  ".repeat(depth),
            icon_glyph(node.icon),
            node.label
        ));
    }
    out.push_str(&format!(
        "\nLoaded {} models from {} directories.\n",
        projection.summary.models, projection.summary.directories
    ));
    out
}

/// Format the list of maps known to the backend.
pub fn format_maps_text(maps: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Maps")));
    if maps.is_empty() {
        out.push_str("No maps available.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Map"]);
    for map in maps {
        table.add_row(vec![map.clone()]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} maps.\n", maps.len()));
    out
}

/// Format a host directory listing, directories first.
pub fn format_directory_listing(path: &str, listing: &DirectoryListing) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(path)));
    if listing.is_empty() {
        out.push_str("Empty directory.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Type"]);
    let directories = listing.iter().filter(|(_, is_dir)| **is_dir);
    let files = listing.iter().filter(|(_, is_dir)| !**is_dir);
    for (name, is_dir) in directories.chain(files) {
        let kind = if *is_dir { "directory" } else { "file" };
        table.add_row(vec![name.clone(), kind.to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// One-line result of an add command.
pub fn format_add_outcome(map_name: &str, outcome: &AddOutcome) -> String {
    match outcome {
        AddOutcome::Added(path) => format!("Added \"{}\" to \"{}\".", path, map_name),
        AddOutcome::Merged(path) => {
            format!("\"{}\" was already in \"{}\"; texture updated.", path, map_name)
        }
    }
}
