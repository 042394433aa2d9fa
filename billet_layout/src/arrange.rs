// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule-based batch layouts.
//!
//! The [`Arranger`] assigns canonical wall slots to recognized furniture
//! categories and falls back to [`find_optimal_position`] for everything else.
//! It never mutates its input; it returns one [`Placement`] per input item and
//! leaves applying them to the caller.
//!
//! Canonical strips of different categories can overlap in small rooms. Run a
//! collision scan after applying the placements to surface that.

use core::f64::consts::{FRAC_PI_2, PI};
use std::collections::BTreeMap;

use kurbo::Point;

use crate::bounds::RoomBounds;
use crate::catalog::{Archetype, Catalog, Category};
use crate::collision::{SearchPolicy, find_optimal_position};
use crate::footprint::{Footprint, quarter_turn_extent};
use crate::item::PlacedItem;

/// Offsets and gaps used by the [`Arranger`], in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrangePolicy {
    /// Gap between a wall and the beds or lockers stacked along it.
    pub wall_margin: f64,
    /// Center of the first bed, measured from the back wall.
    pub bed_start: f64,
    /// Gap between consecutive beds.
    pub bed_gap: f64,
    /// Center of the first locker, measured from the back wall.
    pub locker_start: f64,
    /// Gap between consecutive lockers.
    pub locker_gap: f64,
    /// Center of the first desk, measured from the left wall.
    pub desk_start: f64,
    /// Gap between consecutive desks.
    pub desk_gap: f64,
    /// Gap between the back wall and the desks.
    pub desk_wall_gap: f64,
    /// Distance from a desk's center to its chair's center, towards the front.
    pub chair_offset: f64,
    /// Gap between the foot of a bed and its footlocker's center.
    pub footlocker_gap: f64,
    /// Gap between a bed and the dresser beside it.
    pub dresser_gap: f64,
    /// Items whose edge is closer than this to a wall are pulled onto it by [`Arranger::tidy`].
    pub tidy_threshold: f64,
    /// Distance from the wall that [`Arranger::tidy`] leaves.
    pub tidy_offset: f64,
    /// Policy for the free-position search.
    pub search: SearchPolicy,
}

impl Default for ArrangePolicy {
    fn default() -> Self {
        Self {
            wall_margin: 0.1,
            bed_start: 1.2,
            bed_gap: 0.3,
            locker_start: 0.5,
            locker_gap: 0.2,
            desk_start: 1.5,
            desk_gap: 0.3,
            desk_wall_gap: 0.2,
            chair_offset: 0.6,
            footlocker_gap: 0.3,
            dresser_gap: 0.1,
            tidy_threshold: 0.5,
            tidy_offset: 0.1,
            search: SearchPolicy::default(),
        }
    }
}

/// New position and rotation for the item at `index` of the arranged slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index of the item in the input slice.
    pub index: usize,
    /// New center.
    pub position: Point,
    /// New rotation in radians.
    pub rotation: f64,
}

impl Placement {
    /// Write this placement into `item`.
    pub fn apply(&self, item: &mut PlacedItem) {
        item.position = self.position;
        item.rotation = self.rotation;
    }
}

/// Batch layout over a snapshot of items.
#[derive(Clone, Debug)]
pub struct Arranger<'a> {
    bounds: RoomBounds,
    catalog: &'a Catalog,
    policy: ArrangePolicy,
}

/// Placements accumulated during one pass, with the footprints they occupy.
#[derive(Debug, Default)]
struct Pass {
    placements: Vec<Placement>,
    occupied: Vec<Footprint>,
}

impl Pass {
    fn push(&mut self, index: usize, position: Point, rotation: f64, archetype: Option<&Archetype>) {
        self.placements.push(Placement {
            index,
            position,
            rotation,
        });
        if let Some(a) = archetype {
            self.occupied
                .push(Footprint::new(position, a.width, a.depth, rotation));
        }
    }
}

impl<'a> Arranger<'a> {
    /// Arrange inside `bounds`, resolving types through `catalog`.
    pub fn new(bounds: RoomBounds, catalog: &'a Catalog) -> Self {
        Self {
            bounds,
            catalog,
            policy: ArrangePolicy::default(),
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: ArrangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current policy.
    pub fn policy(&self) -> &ArrangePolicy {
        &self.policy
    }

    /// Assign every item a canonical slot or a searched free position.
    ///
    /// Categories are processed in the order beds, lockers, desks, chairs,
    /// footlockers, dressers, other; the result lists placements in that order
    /// and covers every input index exactly once.
    ///
    /// - Beds and other bed-like items stack front-wards along the left wall.
    /// - Lockers stack along the right wall, turned to face the room.
    /// - Desks line up along the back wall.
    /// - The n-th chair goes in front of the n-th desk.
    /// - The n-th footlocker goes at the foot of the n-th bed.
    /// - The n-th dresser goes beside the n-th bed.
    ///
    /// Items without a partner, and uncategorized items, are placed with
    /// [`find_optimal_position`] against everything placed so far in the pass.
    /// If that finds nothing, or the item's type is unknown, the item keeps its
    /// current position and rotation. Canonical slots past the far wall are
    /// clamped back inside.
    pub fn arrange(&self, items: &[PlacedItem]) -> Vec<Placement> {
        let mut groups: BTreeMap<Category, Vec<(usize, &Archetype)>> = BTreeMap::new();
        let mut unknown = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.catalog.get(&item.archetype_id) {
                Some(a) => groups.entry(a.category).or_default().push((index, a)),
                None => {
                    log::warn!("cannot arrange unknown furniture type {:?}", item.archetype_id);
                    unknown.push(index);
                }
            }
        }
        let group = |c: Category| groups.get(&c).map_or(&[][..], Vec::as_slice);
        let (b, p) = (&self.bounds, &self.policy);
        let mut pass = Pass::default();

        let mut beds: Vec<(Point, &Archetype)> = Vec::new();
        let mut z = b.min_z + p.bed_start;
        for &(index, a) in group(Category::Bed) {
            let slot = Point::new(b.min_x + a.width / 2.0 + p.wall_margin, z);
            z += a.depth + p.bed_gap;
            beds.push((self.canonical(&mut pass, index, a, slot, 0.0), a));
        }

        let mut z = b.min_z + p.locker_start;
        for &(index, a) in group(Category::Locker) {
            let slot = Point::new(b.max_x - a.width / 2.0 - p.wall_margin, z);
            z += a.depth + p.locker_gap;
            self.canonical(&mut pass, index, a, slot, PI);
        }

        let mut desks: Vec<Point> = Vec::new();
        let mut x = b.min_x + p.desk_start;
        for &(index, a) in group(Category::Desk) {
            let slot = Point::new(x, b.min_z + a.depth / 2.0 + p.desk_wall_gap);
            x += a.width + p.desk_gap;
            desks.push(self.canonical(&mut pass, index, a, slot, 0.0));
        }

        for (k, &(index, a)) in group(Category::Chair).iter().enumerate() {
            match desks.get(k) {
                Some(desk) => {
                    let slot = Point::new(desk.x, desk.y + p.chair_offset);
                    self.canonical(&mut pass, index, a, slot, 0.0);
                }
                None => self.search_or_keep(&mut pass, index, &items[index], a),
            }
        }

        for (k, &(index, a)) in group(Category::Footlocker).iter().enumerate() {
            match beds.get(k) {
                Some(&(bed, bed_type)) => {
                    let slot = Point::new(bed.x, bed.y + bed_type.depth / 2.0 + p.footlocker_gap);
                    self.canonical(&mut pass, index, a, slot, 0.0);
                }
                None => self.search_or_keep(&mut pass, index, &items[index], a),
            }
        }

        for (k, &(index, a)) in group(Category::Dresser).iter().enumerate() {
            match beds.get(k) {
                Some(&(bed, bed_type)) => {
                    let slot = Point::new(
                        bed.x + bed_type.width / 2.0 + a.width / 2.0 + p.dresser_gap,
                        bed.y - bed_type.depth / 2.0 + a.depth / 2.0,
                    );
                    self.canonical(&mut pass, index, a, slot, 0.0);
                }
                None => self.search_or_keep(&mut pass, index, &items[index], a),
            }
        }

        for &(index, a) in group(Category::Other) {
            self.search_or_keep(&mut pass, index, &items[index], a);
        }

        for index in unknown {
            let item = &items[index];
            pass.push(index, item.position, item.rotation, None);
        }
        pass.placements
    }

    /// Re-place every item with the free-position search, one type at a time.
    ///
    /// Items are grouped by type id in order of first appearance. Each item is
    /// searched against everything placed before it; items that find no free spot
    /// keep their position and rotation and still block later items. The result
    /// is in processing order and covers every input index exactly once.
    pub fn optimize_layout(&self, items: &[PlacedItem]) -> Vec<Placement> {
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let id = item.archetype_id.as_str();
            match groups.iter_mut().find(|(g, _)| *g == id) {
                Some((_, members)) => members.push(index),
                None => groups.push((id, vec![index])),
            }
        }

        let mut pass = Pass::default();
        for (id, members) in groups {
            let archetype = self.catalog.get(id);
            if archetype.is_none() {
                log::warn!("cannot optimize unknown furniture type {id:?}");
            }
            for index in members {
                let item = &items[index];
                match archetype {
                    Some(a) => self.search_or_keep(&mut pass, index, item, a),
                    None => pass.push(index, item.position, item.rotation, None),
                }
            }
        }
        pass.placements
    }

    /// Square up items: rotations snap to the nearest quarter turn, and items
    /// whose edge is within `tidy_threshold` of a wall are pulled to
    /// `tidy_offset` off that wall. Results are in input order.
    ///
    /// The wall test uses the footprint after the rotation snap. The left and back
    /// walls win over the right and front ones when an item is near both.
    pub fn tidy(&self, items: &[PlacedItem]) -> Vec<Placement> {
        let (b, p) = (&self.bounds, &self.policy);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let rotation = (item.rotation / FRAC_PI_2).round() * FRAC_PI_2;
                let Some(a) = self.catalog.get(&item.archetype_id) else {
                    log::warn!("cannot tidy unknown furniture type {:?}", item.archetype_id);
                    return Placement {
                        index,
                        position: item.position,
                        rotation: item.rotation,
                    };
                };
                let (w, d) = quarter_turn_extent(a.width, a.depth, rotation);
                let (hw, hd) = (w / 2.0, d / 2.0);
                let Point { mut x, y: mut z } = item.position;
                if x - hw < b.min_x + p.tidy_threshold {
                    x = b.min_x + hw + p.tidy_offset;
                } else if x + hw > b.max_x - p.tidy_threshold {
                    x = b.max_x - hw - p.tidy_offset;
                }
                if z - hd < b.min_z + p.tidy_threshold {
                    z = b.min_z + hd + p.tidy_offset;
                } else if z + hd > b.max_z - p.tidy_threshold {
                    z = b.max_z - hd - p.tidy_offset;
                }
                Placement {
                    index,
                    position: Point::new(x, z),
                    rotation,
                }
            })
            .collect()
    }

    /// Record a canonical slot, clamped into the bounds. Returns the final position.
    fn canonical(
        &self,
        pass: &mut Pass,
        index: usize,
        archetype: &Archetype,
        slot: Point,
        rotation: f64,
    ) -> Point {
        let (w, d) = quarter_turn_extent(archetype.width, archetype.depth, rotation);
        let position = self.bounds.clamp_center(slot, w, d);
        if position != slot {
            log::debug!("canonical slot {slot:?} for item {index} clamped to {position:?}");
        }
        pass.push(index, position, rotation, Some(archetype));
        position
    }

    fn search_or_keep(&self, pass: &mut Pass, index: usize, item: &PlacedItem, archetype: &Archetype) {
        let found = find_optimal_position(
            archetype.width,
            archetype.depth,
            &self.bounds,
            &pass.occupied,
            &self.policy.search,
        );
        match found {
            Some(position) => pass.push(index, position, 0.0, Some(archetype)),
            None => {
                log::debug!("no free spot for item {index}; keeping its position");
                pass.push(index, item.position, item.rotation, Some(archetype));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{all_collisions, is_colliding};
    use crate::floor::FloorPlan;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn items(ids: &[&str]) -> Vec<PlacedItem> {
        ids.iter()
            .map(|id| PlacedItem::new(*id, Point::ZERO, 0.3))
            .collect()
    }

    fn barracks_bounds() -> RoomBounds {
        FloorPlan::barracks(3.5, 5.05).main_room_bounds()
    }

    fn placement_of(placements: &[Placement], index: usize) -> Placement {
        *placements.iter().find(|p| p.index == index).unwrap()
    }

    #[test]
    fn arrange_covers_every_item_once() {
        let catalog = Catalog::barracks();
        let arranger = Arranger::new(barracks_bounds(), &catalog);
        let input = items(&["single-bed", "desk", "dresser-5", "bed-drawer-2", "trash-bin", "chair"]);
        let placements = arranger.arrange(&input);
        assert_eq!(placements.len(), 6);
        let mut seen: Vec<usize> = placements.iter().map(|p| p.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn arrange_follows_category_order() {
        let catalog = Catalog::barracks();
        let arranger = Arranger::new(barracks_bounds(), &catalog);
        let input = items(&["trash-bin", "chair", "desk", "locker", "single-bed"]);
        let order: Vec<usize> = arranger.arrange(&input).iter().map(|p| p.index).collect();
        assert_eq!(order, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn canonical_wall_slots() {
        let catalog = Catalog::barracks();
        let bounds = RoomBounds::centered(3.5, 8.0);
        let arranger = Arranger::new(bounds, &catalog);
        let input = items(&["single-bed", "single-bed", "locker", "desk", "chair", "footlocker", "dresser"]);
        let placements = arranger.arrange(&input);

        let bed0 = placement_of(&placements, 0);
        assert!(approx_eq(bed0.position.x, bounds.min_x + 0.5 + 0.1));
        assert!(approx_eq(bed0.position.y, bounds.min_z + 1.2));
        assert_eq!(bed0.rotation, 0.0);
        let bed1 = placement_of(&placements, 1);
        assert!(approx_eq(bed1.position.x, bed0.position.x));
        assert!(approx_eq(bed1.position.y, bed0.position.y + 2.15 + 0.3));

        let locker = placement_of(&placements, 2);
        assert!(approx_eq(locker.position.x, bounds.max_x - 0.3 - 0.1));
        assert!(approx_eq(locker.position.y, bounds.min_z + 0.5));
        assert_eq!(locker.rotation, PI);

        let desk = placement_of(&placements, 3);
        assert!(approx_eq(desk.position.x, bounds.min_x + 1.5));
        assert!(approx_eq(desk.position.y, bounds.min_z + 0.3 + 0.2));
        let chair = placement_of(&placements, 4);
        assert!(approx_eq(chair.position.x, desk.position.x));
        assert!(approx_eq(chair.position.y, desk.position.y + 0.6));

        let footlocker = placement_of(&placements, 5);
        assert!(approx_eq(footlocker.position.x, bed0.position.x));
        assert!(approx_eq(footlocker.position.y, bed0.position.y + 1.075 + 0.3));

        let dresser = placement_of(&placements, 6);
        assert!(approx_eq(dresser.position.x, bed0.position.x + 0.5 + 0.4 + 0.1));
        assert!(approx_eq(dresser.position.y, bed0.position.y - 1.075 + 0.225));
    }

    #[test]
    fn bed_drawer_units_stack_with_beds() {
        let catalog = Catalog::barracks();
        let bounds = RoomBounds::centered(3.5, 8.0);
        let arranger = Arranger::new(bounds, &catalog);
        let input = items(&["dresser", "bed-drawer-2", "single-bed"]);
        let placements = arranger.arrange(&input);
        let order: Vec<usize> = placements.iter().map(|p| p.index).collect();
        assert_eq!(order, vec![1, 2, 0]);

        let chest = placement_of(&placements, 1);
        assert!(approx_eq(chest.position.x, bounds.min_x + 0.45 + 0.1));
        assert!(approx_eq(chest.position.y, bounds.min_z + 1.2));
        let bed = placement_of(&placements, 2);
        assert!(approx_eq(bed.position.x, bounds.min_x + 0.5 + 0.1));
        assert!(approx_eq(bed.position.y, chest.position.y + 0.45 + 0.3));

        // The real dresser pairs with the first bed-like item, the chest.
        let dresser = placement_of(&placements, 0);
        assert!(approx_eq(dresser.position.x, chest.position.x + 0.45 + 0.4 + 0.1));
    }

    #[test]
    fn single_bed_then_chest_along_left_wall() {
        let catalog = Catalog::barracks();
        let bounds = RoomBounds::centered(3.5, 8.0);
        let arranger = Arranger::new(bounds, &catalog);
        let placements = arranger.arrange(&items(&["single-bed", "bed-drawer-2"]));
        let bed = placement_of(&placements, 0);
        let chest = placement_of(&placements, 1);
        assert!(approx_eq(chest.position.x, bounds.min_x + 0.45 + 0.1));
        assert!(approx_eq(chest.position.y, bed.position.y + 2.15 + 0.3));
        assert_eq!(chest.rotation, 0.0);
    }

    #[test]
    fn overflowing_slots_are_clamped() {
        let catalog = Catalog::barracks();
        let bounds = barracks_bounds();
        let arranger = Arranger::new(bounds, &catalog);
        let input = items(&["single-bed"; 5]);
        for placement in arranger.arrange(&input) {
            let fp = input[placement.index].footprint(catalog.get("single-bed").unwrap());
            let moved = Footprint { center: placement.position, rotation: placement.rotation, ..fp };
            assert!(bounds.contains_bounds(&moved.bounds()), "{placement:?}");
        }
    }

    #[test]
    fn unpaired_and_other_items_avoid_placed_furniture() {
        let catalog = Catalog::barracks();
        let arranger = Arranger::new(barracks_bounds(), &catalog);
        // Two chairs but one desk, a dresser pair for one bed, and two loose items.
        let input = items(&["desk", "chair", "chair", "single-bed", "dresser", "dresser", "trash-bin", "nightstand"]);
        let placements = arranger.arrange(&input);
        let mut placed: Vec<Footprint> = Vec::new();
        for placement in &placements {
            let a = catalog.get(&input[placement.index].archetype_id).unwrap();
            let fp = Footprint::new(placement.position, a.width, a.depth, placement.rotation);
            if [2, 5, 6, 7].contains(&placement.index) {
                assert!(!is_colliding(&fp, &placed, None), "item {} collides", placement.index);
                assert_eq!(placement.rotation, 0.0);
            }
            placed.push(fp);
        }
    }

    #[test]
    fn unknown_and_unplaceable_items_keep_their_spot() {
        let catalog = Catalog::barracks();
        let tiny = RoomBounds::centered(0.5, 0.5);
        let arranger = Arranger::new(tiny, &catalog);
        let input = vec![
            PlacedItem::new("hammock", Point::new(0.2, 0.1), 0.4),
            PlacedItem::new("nightstand", Point::new(-3.0, 2.0), 1.0),
            PlacedItem::new("trash-bin", Point::new(9.0, 9.0), 2.0),
        ];
        let placements = arranger.arrange(&input);
        assert_eq!(placements.len(), 3);
        let hammock = placement_of(&placements, 0);
        assert_eq!((hammock.position, hammock.rotation), (Point::new(0.2, 0.1), 0.4));
        // The nightstand fits; the trash bin then has nowhere to go.
        let nightstand = placement_of(&placements, 1);
        assert_eq!(nightstand.rotation, 0.0);
        let bin = placement_of(&placements, 2);
        assert_eq!((bin.position, bin.rotation), (Point::new(9.0, 9.0), 2.0));
    }

    #[test]
    fn optimize_layout_groups_by_type_and_avoids_overlap() {
        let catalog = Catalog::barracks();
        let bounds = RoomBounds::centered(4.0, 4.0);
        let arranger = Arranger::new(bounds, &catalog);
        let input = items(&["chair", "desk", "chair", "locker", "desk"]);
        let placements = arranger.optimize_layout(&input);
        let order: Vec<usize> = placements.iter().map(|p| p.index).collect();
        assert_eq!(order, vec![0, 2, 1, 4, 3]);

        let footprints: Vec<Footprint> = placements
            .iter()
            .map(|p| {
                let a = catalog.get(&input[p.index].archetype_id).unwrap();
                Footprint::new(p.position, a.width, a.depth, p.rotation)
            })
            .collect();
        assert!(all_collisions(&footprints).is_empty());
        for fp in &footprints {
            assert!(bounds.contains_bounds(&fp.bounds()));
        }
    }

    #[test]
    fn tidy_pulls_items_onto_walls() {
        let catalog = Catalog::barracks();
        let arranger = Arranger::new(RoomBounds::centered(4.0, 4.0), &catalog);
        let input = vec![
            PlacedItem::new("chair", Point::new(-1.6, 0.0), 0.2),
            PlacedItem::new("desk", Point::new(1.75, 0.3), 1.4),
            PlacedItem::new("nightstand", Point::new(0.0, 0.0), -0.1),
            PlacedItem::new("hammock", Point::new(1.9, 1.9), 0.7),
        ];
        let tidied = arranger.tidy(&input);

        assert!(approx_eq(tidied[0].position.x, -2.0 + 0.225 + 0.1));
        assert_eq!(tidied[0].position.y, 0.0);
        assert_eq!(tidied[0].rotation, 0.0);

        // Turned a quarter, so the desk's 0.6 m side faces the wall.
        assert!(approx_eq(tidied[1].rotation, FRAC_PI_2));
        assert!(approx_eq(tidied[1].position.x, 2.0 - 0.3 - 0.1));

        assert_eq!(tidied[2].position, Point::ZERO);
        assert_eq!(tidied[2].rotation, 0.0);

        assert_eq!(tidied[3].position, Point::new(1.9, 1.9));
        assert_eq!(tidied[3].rotation, 0.7);
    }
}
