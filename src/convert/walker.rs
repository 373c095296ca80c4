//! Depth-first walk over the element tree, collecting drawable paths

use crate::source::{Element, ElementKind};

use super::resolve::resolve_path;
use super::types::DrawablePath;

/// Collect every drawable path below and including `element`, in document order
///
/// A group whose direct children include both clip-paths and paths pairs them
/// positionally: the i-th clip-path's geometry becomes the rendered shape of
/// the i-th path. Unpaired leftovers are dropped. Free-standing clip-paths
/// draw nothing.
pub fn walk(element: &Element) -> Vec<DrawablePath> {
    let mut paths = Vec::new();
    collect(element, &mut paths);
    paths
}

fn collect(element: &Element, out: &mut Vec<DrawablePath>) {
    match element.kind {
        ElementKind::Path => out.extend(resolve_path(element, None)),
        ElementKind::ClipPath => {}
        ElementKind::Group if has_clip_pairing(element) => collect_pairs(element, out),
        ElementKind::Group | ElementKind::Vector | ElementKind::Other => {
            for child in &element.children {
                collect(child, out);
            }
        }
    }
}

fn has_clip_pairing(group: &Element) -> bool {
    group.children_of_kind(ElementKind::ClipPath).next().is_some()
        && group.children_of_kind(ElementKind::Path).next().is_some()
}

fn collect_pairs(group: &Element, out: &mut Vec<DrawablePath>) {
    let clips: Vec<&Element> = group.children_of_kind(ElementKind::ClipPath).collect();
    let paths: Vec<&Element> = group.children_of_kind(ElementKind::Path).collect();

    if clips.len() != paths.len() {
        log::warn!(
            "group{} has {} clip-path(s) and {} path(s); only the first {} pair(s) are drawn",
            group
                .android_attribute("name")
                .map(|name| format!(" '{}'", name))
                .unwrap_or_default(),
            clips.len(),
            paths.len(),
            clips.len().min(paths.len()),
        );
    }

    for (clip, path) in clips.iter().zip(&paths) {
        out.extend(resolve_path(path, clip.android_attribute("pathData")));
    }
}
