use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::holiday::holidayindex::HolidayIndex;
use crate::holiday::holidayprovider::{HolidayProvider, Region};

#[derive(Clone, PartialEq, Eq, Hash)]
struct IndexKey {
    region: Region,
    year_from: i32,
    year_to: i32
}

/// Memoizes holiday indexes per `(region, year span)`.
///
/// Entries are never invalidated, so the cache must stay tied to one provider.
#[derive(Default)]
pub struct HolidayIndexCache {
    map_cell: RefCell<HashMap<IndexKey, Arc<HolidayIndex>>>
}

impl HolidayIndexCache {
    pub fn new() -> HolidayIndexCache {
        HolidayIndexCache::default()
    }

    pub fn get_or_build(&self, provider: &dyn HolidayProvider, region: &Region, year_from: i32, year_to: i32) -> Arc<HolidayIndex> {
        let key = IndexKey {
            region: region.clone(),
            year_from,
            year_to
        };

        if let Some(index) = self.map_cell.borrow().get(&key) {
            debug!("holiday index cache hit for {} {}..={}", region, year_from, year_to);
            return Arc::clone(index);
        }

        let index = Arc::new(HolidayIndex::build(provider, region, year_from, year_to));
        self.map_cell.borrow_mut().insert(key, Arc::clone(&index));
        index
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.map_cell.borrow_mut().clear();
    }
}
