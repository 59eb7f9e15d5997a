use roomdb::domain::{BuildingCount, FreeRoom};
use roomdb::SearchResults;

/// Fetched search results plus the building filter, pagination and row
/// focus applied on top of them.
#[derive(Debug, Clone)]
pub struct ResultsView {
    per_building: Vec<BuildingCount>,
    rooms: Vec<FreeRoom>,
    selected_building: Option<String>,
    page: usize,
    page_size: usize,
    pub focused_building: Option<usize>,
    pub focused_room: Option<usize>, // Index within the current page
}

impl ResultsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            per_building: Vec::new(),
            rooms: Vec::new(),
            selected_building: None,
            page: 0,
            page_size: page_size.max(1),
            focused_building: None,
            focused_room: None,
        }
    }

    /// Swap in a new result set. The filter, page and focus start over.
    pub fn replace(&mut self, results: SearchResults) {
        self.per_building = results.per_building;
        self.rooms = results.rooms;
        self.selected_building = None;
        self.page = 0;
        self.focused_building = None;
        self.focused_room = None;
    }

    pub fn per_building(&self) -> &[BuildingCount] {
        &self.per_building
    }

    pub fn total_rooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn selected_building(&self) -> Option<&str> {
        self.selected_building.as_deref()
    }

    /// Filter by `building`, or drop the filter if it is already selected.
    pub fn toggle_building(&mut self, building: &str) {
        if self.selected_building.as_deref() == Some(building) {
            self.selected_building = None;
        } else {
            self.selected_building = Some(building.to_string());
        }
        self.page = 0;
        self.focused_room = None;
    }

    pub fn toggle_focused_building(&mut self) {
        let building = self
            .focused_building
            .and_then(|idx| self.per_building.get(idx))
            .map(|row| row.building.clone());
        if let Some(building) = building {
            self.toggle_building(&building);
        }
    }

    pub fn clear_filter(&mut self) {
        if self.selected_building.take().is_some() {
            self.page = 0;
            self.focused_room = None;
        }
    }

    pub fn filtered_rooms(&self) -> Vec<&FreeRoom> {
        match &self.selected_building {
            Some(building) => self
                .rooms
                .iter()
                .filter(|room| &room.building == building)
                .collect(),
            None => self.rooms.iter().collect(),
        }
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_rooms().len()
    }

    /// Number of pages, at least one so an empty list still has a page.
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size).max(1)
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> Vec<&FreeRoom> {
        self.filtered_rooms()
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.focused_room = None;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            self.focused_room = None;
            true
        } else {
            false
        }
    }

    pub fn heading(&self) -> String {
        match &self.selected_building {
            Some(building) => format!("Free Rooms in {}", building),
            None => "All Free Rooms".to_string(),
        }
    }

    pub fn building_focus_up(&mut self) {
        if self.per_building.is_empty() {
            return;
        }
        self.focused_building = Some(match self.focused_building {
            Some(idx) => idx.saturating_sub(1),
            None => self.per_building.len() - 1,
        });
    }

    pub fn building_focus_down(&mut self) {
        if self.per_building.is_empty() {
            return;
        }
        self.focused_building = Some(match self.focused_building {
            Some(idx) if idx + 1 < self.per_building.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    /// Move room focus up; at the top of a page continue on the previous one.
    pub fn room_focus_up(&mut self) {
        let on_page = self.current_page().len();
        if on_page == 0 {
            return;
        }
        match self.focused_room {
            Some(0) => {
                if self.prev_page() {
                    self.focused_room = Some(self.current_page().len().saturating_sub(1));
                } else {
                    self.focused_room = Some(0);
                }
            }
            Some(idx) => self.focused_room = Some(idx - 1),
            None => self.focused_room = Some(on_page - 1),
        }
    }

    /// Move room focus down; at the bottom of a page continue on the next one.
    pub fn room_focus_down(&mut self) {
        let on_page = self.current_page().len();
        if on_page == 0 {
            return;
        }
        match self.focused_room {
            Some(idx) if idx + 1 < on_page => self.focused_room = Some(idx + 1),
            Some(idx) => {
                if self.next_page() {
                    self.focused_room = Some(0);
                } else {
                    self.focused_room = Some(idx);
                }
            }
            None => self.focused_room = Some(0),
        }
    }

    pub fn focused_room(&self) -> Option<&FreeRoom> {
        let idx = self.focused_room?;
        self.current_page().get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(building: &str, number: u32) -> FreeRoom {
        FreeRoom {
            building: building.to_string(),
            room_number: number.to_string(),
            capacity: Some(30),
            features: None,
            earliest_booking: None,
        }
    }

    fn results() -> SearchResults {
        let mut rooms = Vec::new();
        for n in 0..7 {
            rooms.push(room("BUCH", 100 + n));
        }
        for n in 0..3 {
            rooms.push(room("DMP", 200 + n));
        }
        SearchResults {
            per_building: vec![
                BuildingCount {
                    building: "BUCH".to_string(),
                    free_room_count: 7,
                },
                BuildingCount {
                    building: "DMP".to_string(),
                    free_room_count: 3,
                },
            ],
            rooms,
        }
    }

    fn view(page_size: usize) -> ResultsView {
        let mut view = ResultsView::new(page_size);
        view.replace(results());
        view
    }

    #[test]
    fn toggling_same_building_twice_clears_filter() {
        let mut view = view(4);
        view.toggle_building("DMP");
        assert_eq!(view.selected_building(), Some("DMP"));
        assert_eq!(view.filtered_count(), 3);
        assert_eq!(view.heading(), "Free Rooms in DMP");

        view.toggle_building("DMP");
        assert_eq!(view.selected_building(), None);
        assert_eq!(view.filtered_count(), 10);
        assert_eq!(view.heading(), "All Free Rooms");
    }

    #[test]
    fn toggling_other_building_switches_filter() {
        let mut view = view(4);
        view.toggle_building("DMP");
        view.toggle_building("BUCH");
        assert_eq!(view.selected_building(), Some("BUCH"));
        assert!(view.filtered_rooms().iter().all(|r| r.building == "BUCH"));
    }

    #[test]
    fn pages_slice_filtered_rooms() {
        let mut view = view(4);
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.current_page().len(), 4);
        assert!(view.next_page());
        assert!(view.next_page());
        assert_eq!(view.current_page().len(), 2);
        assert_eq!(view.current_page()[0].room_number, "201");
        assert_eq!(view.current_page()[1].room_number, "202");
        assert!(!view.next_page());
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn prev_page_saturates_at_first() {
        let mut view = view(4);
        assert!(!view.prev_page());
        assert_eq!(view.page(), 0);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut view = view(4);
        view.next_page();
        view.toggle_building("BUCH");
        assert_eq!(view.page(), 0);
        assert_eq!(view.page_count(), 2);
    }

    #[test]
    fn empty_results_have_one_page() {
        let mut view = ResultsView::new(10);
        view.replace(SearchResults::default());
        assert_eq!(view.page_count(), 1);
        assert!(view.current_page().is_empty());
        view.room_focus_down();
        assert_eq!(view.focused_room(), None);
    }

    #[test]
    fn replace_clears_filter_and_focus() {
        let mut view = view(4);
        view.toggle_building("DMP");
        view.focused_building = Some(1);
        view.replace(results());
        assert_eq!(view.selected_building(), None);
        assert_eq!(view.focused_building, None);
        assert_eq!(view.page(), 0);
    }

    #[test]
    fn toggle_focused_building_uses_table_row() {
        let mut view = view(4);
        view.building_focus_down();
        view.building_focus_down();
        view.toggle_focused_building();
        assert_eq!(view.selected_building(), Some("DMP"));
    }

    #[test]
    fn room_focus_crosses_pages() {
        let mut view = view(4);
        for _ in 0..5 {
            view.room_focus_down();
        }
        assert_eq!(view.page(), 1);
        assert_eq!(view.focused_room().unwrap().room_number, "104");

        view.room_focus_up();
        assert_eq!(view.page(), 0);
        assert_eq!(view.focused_room().unwrap().room_number, "103");
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let view = view(0);
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.page_count(), 10);
    }
}
