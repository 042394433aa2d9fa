// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive editor state and the operations UI events map onto.

use billet_layout::{
    Archetype, Arranger, Catalog, Collisions, FloorPlan, Footprint, GridSnapper, PlacedItem,
    Placement, RoomBounds, all_collisions, is_colliding, rotated_bounds, space_utilization,
};
use kurbo::Point;

use crate::config::EditorConfig;
use crate::error::{EditorError, LayoutError};
use crate::layout::{DEFAULT_ROOM_HEIGHT, FurnitureEntry, Layout, RoomSpec};
use crate::selection::{Selection, SelectionEvent};
use crate::view::Viewport;

/// Room dimensions and the floor plan derived from them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Room {
    /// Extent along x, in meters.
    pub width: f64,
    /// Extent along z, in meters.
    pub depth: f64,
    /// Wall height, in meters.
    pub height: f64,
    /// Legal placement region.
    pub plan: FloorPlan,
}

impl Room {
    /// A barracks room, see [`FloorPlan::barracks`].
    pub fn barracks(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
            plan: FloorPlan::barracks(width, depth),
        }
    }

    /// Grid anchored at the room's back-left corner.
    pub fn grid(&self, grid_size: f64) -> GridSnapper {
        GridSnapper::for_room(grid_size, self.width, self.depth)
    }

    /// Region used by batch layouts and free-position search.
    pub fn arrange_bounds(&self) -> RoomBounds {
        self.plan.main_room_bounds()
    }

    fn spec(&self) -> RoomSpec {
        RoomSpec {
            width: self.width,
            depth: self.depth,
            height: self.height,
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::barracks(3.5, 5.05, DEFAULT_ROOM_HEIGHT)
    }
}

/// What [`EditorSession::from_layout`] could not restore.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Type ids of dropped entries, in document order.
    pub skipped: Vec<String>,
}

impl LoadReport {
    /// True if every entry was restored.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// An editing session: the room, its furniture, and the selection.
///
/// Every item in the session has a type known to the session's catalog, so item
/// indices and [`footprints`](Self::footprints) indices always agree.
///
/// Collision state is never pushed. Call [`recompute_collisions`](Self::recompute_collisions)
/// after a change and highlight the indices in the returned report.
#[derive(Clone, Debug)]
pub struct EditorSession {
    room: Room,
    catalog: Catalog,
    items: Vec<PlacedItem>,
    selection: Selection,
    config: EditorConfig,
    viewport: Viewport,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(Room::default(), Catalog::barracks(), EditorConfig::default())
    }
}

impl EditorSession {
    /// An empty session.
    pub fn new(room: Room, catalog: Catalog, config: EditorConfig) -> Self {
        let viewport = Viewport::new(config.zoom, kurbo::Vec2::ZERO);
        Self {
            room,
            catalog,
            items: Vec::new(),
            selection: Selection::new(),
            config,
            viewport,
        }
    }

    /// The room.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The catalog items resolve against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All items in drawing order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Option<&PlacedItem> {
        self.items.get(index)
    }

    /// Selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Index of the selected item.
    pub fn selected(&self) -> Option<usize> {
        self.selection.current()
    }

    /// Current configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Mutable configuration.
    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.config
    }

    /// The top-down view.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable top-down view.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    fn archetype(&self, index: usize) -> Result<&Archetype, EditorError> {
        let item = self.items.get(index).ok_or(EditorError::NoSuchItem(index))?;
        self.catalog
            .get(&item.archetype_id)
            .ok_or_else(|| EditorError::UnknownArchetype(item.archetype_id.clone()))
    }

    fn snapped(&self, raw: Point, archetype: &Archetype, rotation: f64, snap: bool) -> Point {
        if snap {
            self.room
                .grid(self.config.grid_size)
                .snap(raw, archetype.width, archetype.depth, rotation)
        } else {
            raw
        }
    }

    /// Add an item of type `id` near `raw`: snap if `snap`, then clamp into the
    /// legal floor region. The new item is selected. Returns its index.
    pub fn place_item(&mut self, id: &str, raw: Point, snap: bool) -> Result<usize, EditorError> {
        let archetype = self
            .catalog
            .get(id)
            .ok_or_else(|| EditorError::UnknownArchetype(id.to_string()))?;
        let position = self.snapped(raw, archetype, 0.0, snap);
        let position = self
            .room
            .plan
            .constrain(position, archetype.width, archetype.depth);
        self.items.push(PlacedItem::new(id, position, 0.0));
        let index = self.items.len() - 1;
        self.selection.select(Some(index));
        Ok(index)
    }

    /// Drag an item to `raw`, snapping if `snap`. No clamping happens until
    /// [`finalize_placement`](Self::finalize_placement).
    pub fn move_item(&mut self, index: usize, raw: Point, snap: bool) -> Result<Point, EditorError> {
        let archetype = self.archetype(index)?;
        let position = self.snapped(raw, archetype, self.items[index].rotation, snap);
        self.items[index].position = position;
        Ok(position)
    }

    /// Clamp an item into the legal floor region, using its rotated extent.
    pub fn finalize_placement(&mut self, index: usize) -> Result<Point, EditorError> {
        let archetype = self.archetype(index)?;
        let item = &self.items[index];
        let bounds = rotated_bounds(item.position, archetype.width, archetype.depth, item.rotation);
        let position = self
            .room
            .plan
            .constrain(item.position, bounds.width, bounds.depth);
        if position != item.position {
            log::trace!("item {index} clamped from {:?} to {position:?}", item.position);
        }
        self.items[index].position = position;
        Ok(position)
    }

    /// Rotate an item by `delta_degrees` and, if `snap`, re-snap its position for
    /// the new orientation. Returns the new rotation in radians.
    pub fn rotate_item(&mut self, index: usize, delta_degrees: f64, snap: bool) -> Result<f64, EditorError> {
        let archetype = self.archetype(index)?;
        let item = &self.items[index];
        let rotation = item.rotation + delta_degrees.to_radians();
        let position = self.snapped(item.position, archetype, rotation, snap);
        let item = &mut self.items[index];
        item.rotation = rotation;
        item.position = position;
        Ok(rotation)
    }

    /// Move an item by whole keyboard steps of `nudge_step` meters. Nudges are
    /// neither snapped nor clamped.
    pub fn nudge_item(&mut self, index: usize, dx_steps: i32, dz_steps: i32) -> Result<Point, EditorError> {
        let step = self.config.nudge_step;
        let item = self.items.get_mut(index).ok_or(EditorError::NoSuchItem(index))?;
        item.position.x += f64::from(dx_steps) * step;
        item.position.y += f64::from(dz_steps) * step;
        Ok(item.position)
    }

    /// Delete an item. The selection is cleared if it pointed at it and
    /// re-indexed if it pointed past it.
    ///
    /// Returns the removed item and the selection transitions, which hold a
    /// `Deselected` event when the removed item was selected.
    pub fn remove_item(&mut self, index: usize) -> Result<(PlacedItem, Vec<SelectionEvent>), EditorError> {
        if index >= self.items.len() {
            return Err(EditorError::NoSuchItem(index));
        }
        let removed = self.items.remove(index);
        let events = self.selection.on_removed(index);
        Ok((removed, events))
    }

    /// Delete every item, returning the selection transitions.
    pub fn clear(&mut self) -> Vec<SelectionEvent> {
        self.items.clear();
        self.selection.clear()
    }

    /// [`place_item`](Self::place_item), snapping when the config has
    /// [`SNAP_TO_GRID`](crate::EditorOptions::SNAP_TO_GRID) set.
    pub fn drop_item(&mut self, id: &str, raw: Point) -> Result<usize, EditorError> {
        self.place_item(id, raw, self.config.snap_enabled())
    }

    /// [`move_item`](Self::move_item), snapping per the config.
    pub fn drag_item(&mut self, index: usize, raw: Point) -> Result<Point, EditorError> {
        self.move_item(index, raw, self.config.snap_enabled())
    }

    /// Rotate by `steps` keystrokes of `rotate_step_degrees` each, re-snapping per
    /// the config. Negative steps turn the other way.
    pub fn rotate_steps(&mut self, index: usize, steps: i32) -> Result<f64, EditorError> {
        let delta = f64::from(steps) * self.config.rotate_step_degrees;
        self.rotate_item(index, delta, self.config.snap_enabled())
    }

    /// Collisions to highlight: a fresh report, or an empty one when
    /// [`COLLISION_DETECTION`](crate::EditorOptions::COLLISION_DETECTION) is off.
    pub fn highlighted_collisions(&self) -> Collisions {
        if self.config.collisions_enabled() {
            self.recompute_collisions()
        } else {
            Collisions::default()
        }
    }

    /// Topmost item whose rotated rectangle contains `point`.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items.iter().enumerate().rev().find_map(|(i, item)| {
            item.resolve(&self.catalog)
                .filter(|fp| fp.contains_point(point))
                .map(|_| i)
        })
    }

    /// Select whatever is under `point`, or nothing.
    pub fn select_at(&mut self, point: Point) -> Vec<SelectionEvent> {
        let hit = self.item_at(point);
        self.selection.select(hit)
    }

    /// Select the item at `index`, or nothing.
    pub fn select(&mut self, index: Option<usize>) -> Result<Vec<SelectionEvent>, EditorError> {
        if let Some(i) = index.filter(|&i| i >= self.items.len()) {
            return Err(EditorError::NoSuchItem(i));
        }
        Ok(self.selection.select(index))
    }

    /// Footprints of all items, index-aligned with [`items`](Self::items).
    pub fn footprints(&self) -> Vec<Footprint> {
        self.items
            .iter()
            .filter_map(|item| item.resolve(&self.catalog))
            .collect()
    }

    /// Fresh collision report over all items.
    pub fn recompute_collisions(&self) -> Collisions {
        all_collisions(&self.footprints())
    }

    /// Whether the item at `index` overlaps any other item.
    pub fn is_item_colliding(&self, index: usize) -> Result<bool, EditorError> {
        let archetype = self.archetype(index)?;
        let candidate = self.items[index].footprint(archetype);
        Ok(is_colliding(&candidate, &self.footprints(), Some(index)))
    }

    /// Share of the room floor covered by furniture, in percent.
    pub fn utilization_percent(&self) -> f64 {
        space_utilization(&self.footprints(), self.room.width, self.room.depth)
    }

    fn apply(&mut self, placements: &[Placement]) -> Collisions {
        for placement in placements {
            if let Some(item) = self.items.get_mut(placement.index) {
                placement.apply(item);
            }
        }
        self.recompute_collisions()
    }

    fn arranger(&self) -> Arranger<'_> {
        Arranger::new(self.room.arrange_bounds(), &self.catalog)
    }

    /// Lay the whole room out by category, see [`Arranger::arrange`].
    pub fn auto_arrange(&mut self) -> Collisions {
        let placements = self.arranger().arrange(&self.items);
        self.apply(&placements)
    }

    /// Re-place every item by free-position search, see [`Arranger::optimize_layout`].
    pub fn optimize_layout(&mut self) -> Collisions {
        let placements = self.arranger().optimize_layout(&self.items);
        self.apply(&placements)
    }

    /// Square rotations and pull items onto nearby walls, see [`Arranger::tidy`].
    pub fn tidy(&mut self) -> Collisions {
        let placements = self.arranger().tidy(&self.items);
        self.apply(&placements)
    }

    /// Change the room size. Items are left where they are.
    pub fn resize_room(&mut self, width: f64, depth: f64, height: f64) -> Result<(), EditorError> {
        if !(width > 0.0 && depth > 0.0) {
            return Err(LayoutError::InvalidRoom { width, depth }.into());
        }
        self.room = Room::barracks(width, depth, height);
        Ok(())
    }

    /// Snapshot as a persisted layout.
    pub fn to_layout(&self) -> Layout {
        Layout {
            room: self.room.spec(),
            furniture: self
                .items
                .iter()
                .map(|item| FurnitureEntry {
                    kind: item.archetype_id.clone(),
                    x: item.position.x,
                    z: item.position.y,
                    rotation: item.rotation,
                })
                .collect(),
        }
    }

    /// Restore a session from a layout.
    ///
    /// Positions and rotations are taken verbatim, even outside the room. Entries
    /// with unknown types are dropped and listed in the report.
    pub fn from_layout(
        layout: &Layout,
        catalog: Catalog,
        config: EditorConfig,
    ) -> Result<(Self, LoadReport), EditorError> {
        layout.validate()?;
        let RoomSpec { width, depth, height } = layout.room;
        let mut session = Self::new(Room::barracks(width, depth, height), catalog, config);
        let mut report = LoadReport::default();
        for entry in &layout.furniture {
            if session.catalog.contains(&entry.kind) {
                session.items.push(PlacedItem::new(
                    entry.kind.clone(),
                    Point::new(entry.x, entry.z),
                    entry.rotation,
                ));
            } else {
                log::warn!("dropping layout entry of unknown type {:?}", entry.kind);
                report.skipped.push(entry.kind.clone());
            }
        }
        Ok((session, report))
    }

    /// [`from_layout`](Self::from_layout) on a JSON document.
    pub fn from_json(
        json: &str,
        catalog: Catalog,
        config: EditorConfig,
    ) -> Result<(Self, LoadReport), EditorError> {
        let layout = Layout::from_json(json)?;
        Self::from_layout(&layout, catalog, config)
    }

    /// [`to_layout`](Self::to_layout) as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(self.to_layout().to_json_pretty()?)
    }
}
