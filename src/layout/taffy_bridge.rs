//! Taffy Bridge - Track layout through the Taffy flexbox engine
//!
//! Converts the page's item boxes to Taffy styles, runs layout computation,
//! and writes positions back onto the page elements.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, LengthPercentage, NodeId, Size,
    Style, TaffyTree,
};
use tracing::trace;

use super::types::TrackLayout;
use crate::dom::Page;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::types::ElementIndex;

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Fixed-size flex item that never shrinks below its declared width.
fn item_style(width: f64, height: f64) -> Style {
    Style {
        size: Size {
            width: Dimension::Length(width as f32),
            height: Dimension::Length(height as f32),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

/// Single-line row container.
fn track_style(gap: f64) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::NoWrap,
        gap: Size {
            width: LengthPercentage::Length(gap as f32),
            height: LengthPercentage::Length(0.0),
        },
        ..Default::default()
    }
}

fn layout_err(err: impl std::fmt::Display) -> ShowcaseError {
    ShowcaseError::layout(err.to_string())
}

// =============================================================================
// LAYOUT COMPUTATION
// =============================================================================

/// Lay `items` out in a row inside `track`.
///
/// Item sizes come from each element's declared `rect`. On success every
/// item's `rect.x`/`rect.y` holds its track-relative position and the
/// track's `rect` size is the row's content size.
///
/// # Errors
///
/// [`ShowcaseError::Layout`] if an index no longer resolves or Taffy
/// rejects the tree.
pub fn compute_track_layout(
    page: &mut Page,
    track: ElementIndex,
    items: &[ElementIndex],
    gap: f64,
) -> ShowcaseResult<TrackLayout> {
    if !page.contains(track) {
        return Err(ShowcaseError::layout(format!("track element {track} is gone")));
    }

    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut nodes: Vec<NodeId> = Vec::with_capacity(items.len());

    for &item in items {
        let rect = page
            .get(item)
            .map(|el| el.rect)
            .ok_or_else(|| ShowcaseError::layout(format!("item element {item} is gone")))?;
        let node = tree
            .new_leaf(item_style(rect.width, rect.height))
            .map_err(layout_err)?;
        nodes.push(node);
    }

    let root = tree
        .new_with_children(track_style(gap), &nodes)
        .map_err(layout_err)?;

    let available = Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available).map_err(layout_err)?;

    let root_layout = tree.layout(root).map_err(layout_err)?;
    let mut result = TrackLayout {
        width: root_layout.size.width as f64,
        height: root_layout.size.height as f64,
        item_x: Vec::with_capacity(items.len()),
    };

    for (&item, &node) in items.iter().zip(&nodes) {
        let layout = tree.layout(node).map_err(layout_err)?;
        let x = layout.location.x as f64;
        let y = layout.location.y as f64;
        if let Some(el) = page.get_mut(item) {
            el.rect.x = x;
            el.rect.y = y;
        }
        result.item_x.push(x);
    }

    if let Some(el) = page.get_mut(track) {
        el.rect.width = result.width;
        el.rect.height = result.height;
    }

    trace!(
        items = items.len(),
        width = result.width,
        "track layout computed"
    );
    Ok(result)
}

// =============================================================================
// Tests
// =============================================================================
