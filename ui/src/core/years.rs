//! Cross-constrained year selectors.
//!
//! Both option sets are captured once when the view is set up and are treated
//! as authoritative from then on. Changing one selector rebuilds the other's
//! options from its captured set:
//!
//! - `yearStart = Y` keeps finish years `>= Y`
//! - `yearFinish = Y` keeps start years `<= Y`
//!
//! The selector that changed keeps its own options. A rebuilt selector starts
//! over at its first remaining option, the way a browser selects the first
//! entry of a freshly filled `<select>`.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearRange {
    start_years: Vec<i32>,
    finish_years: Vec<i32>,
    start_options: Vec<i32>,
    finish_options: Vec<i32>,
    start: Option<i32>,
    finish: Option<i32>,
}

impl YearRange {
    /// Capture the full option sets and the initial selections.
    ///
    /// An initial selection that is not offered is replaced by the first
    /// (start) or last (finish) option. The offered options are narrowed by
    /// the initial selections right away.
    pub fn new(
        start_years: Vec<i32>,
        finish_years: Vec<i32>,
        start: Option<i32>,
        finish: Option<i32>,
    ) -> Self {
        let start = start
            .filter(|year| start_years.contains(year))
            .or_else(|| start_years.first().copied());
        let finish_options = at_least(&finish_years, start);
        let finish = finish
            .filter(|year| finish_options.contains(year))
            .or_else(|| finish_options.last().copied());
        let start_options = at_most(&start_years, finish);

        Self {
            start_years,
            finish_years,
            start_options,
            finish_options,
            start,
            finish,
        }
    }

    pub fn start(&self) -> Option<i32> {
        self.start
    }

    pub fn finish(&self) -> Option<i32> {
        self.finish
    }

    pub fn start_options(&self) -> &[i32] {
        &self.start_options
    }

    pub fn finish_options(&self) -> &[i32] {
        &self.finish_options
    }

    /// Handle a change of the start selector.
    pub fn select_start(&mut self, year: i32) {
        self.start = Some(year);
        self.finish_options = at_least(&self.finish_years, Some(year));
        self.finish = self.finish_options.first().copied();
    }

    /// Handle a change of the finish selector.
    pub fn select_finish(&mut self, year: i32) {
        self.finish = Some(year);
        self.start_options = at_most(&self.start_years, Some(year));
        self.start = self.start_options.first().copied();
    }
}

/// Years `>= bound`, in captured order. No bound keeps everything.
fn at_least(years: &[i32], bound: Option<i32>) -> Vec<i32> {
    years
        .iter()
        .copied()
        .filter(|year| bound.map_or(true, |bound| *year >= bound))
        .collect()
}

fn at_most(years: &[i32], bound: Option<i32>) -> Vec<i32> {
    years
        .iter()
        .copied()
        .filter(|year| bound.map_or(true, |bound| *year <= bound))
        .collect()
}

/// Parse a selector value. Select values arrive as strings.
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
