//! Column assignment and grid geometry for a day's appointments.
//!
//! Overlapping appointments are split into connected overlap groups.
//! Inside a group, members are placed in order of start time (longer
//! first on ties) into the lowest lane not taken by anything they overlap
//! or by anything *those* overlap. A chain A-B-C where only neighbours
//! overlap therefore takes three lanes, since B is squeezed by both, while
//! a long chain of back-to-back overlaps cycles through three lanes rather
//! than growing one per booking. Lane counts are then spread over the
//! clock hours each group touches, which keeps widths consistent inside an
//! hour row of the grid.

use crate::models::Appointment;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Result of one layout pass. Rebuilt from scratch every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    /// appointment id -> 0-based lane
    pub columns: BTreeMap<String, usize>,
    /// clock hour -> highest lane index used by any group touching it
    pub max_columns: BTreeMap<u32, usize>,
}

impl ColumnInfo {
    pub fn column_of(&self, id: &str) -> usize {
        self.columns.get(id).copied().unwrap_or(0)
    }

    /// Lanes needed across `hours`: highest bucket value plus one.
    pub fn column_count(&self, hours: std::ops::Range<u32>) -> usize {
        self.max_columns
            .range(hours)
            .map(|(_, max)| *max)
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    Week,
}

/// Grid geometry shared by every appointment in a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// First hour shown at the top of the grid.
    pub start_hour: u32,
    /// Pixels per hour row.
    pub hour_height: f64,
    /// Horizontal margin in percent, applied on both sides.
    pub page_margin: f64,
    pub mode: ViewMode,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            hour_height: 60.0,
            page_margin: 2.0,
            mode: ViewMode::Day,
        }
    }
}

/// `top`/`height` in pixels, `left`/`width` in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

/// Clock hours touched by `[start, end)` minutes.
pub fn hour_span(start: u32, end: u32) -> std::ops::Range<u32> {
    let first = start / 60;
    let last = end.div_ceil(60).max(first + 1);
    first..last
}

fn sorted_for_layout(appointments: &[Appointment]) -> Vec<&Appointment> {
    let mut sorted: Vec<&Appointment> = appointments.iter().collect();
    sorted.sort_by(|a, b| {
        a.start_minutes()
            .cmp(&b.start_minutes())
            .then(b.duration.cmp(&a.duration))
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// Maximal sets of transitively overlapping appointments, as indices into
/// `sorted`. Each group is grown until no outside appointment overlaps
/// any member; members come back in sorted order.
fn overlap_groups(sorted: &[&Appointment]) -> Vec<Vec<usize>> {
    let mut grouped = vec![false; sorted.len()];
    let mut groups = Vec::new();

    for seed in 0..sorted.len() {
        if grouped[seed] {
            continue;
        }
        grouped[seed] = true;
        let mut group = vec![seed];

        loop {
            let mut grew = false;
            for candidate in 0..sorted.len() {
                if grouped[candidate] {
                    continue;
                }
                if group.iter().any(|&m| sorted[m].overlaps(sorted[candidate])) {
                    grouped[candidate] = true;
                    group.push(candidate);
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }

        group.sort_unstable();
        groups.push(group);
    }
    groups
}

/// Lowest lane unused by the already placed members that overlap `idx`,
/// directly or through one shared neighbour.
fn lowest_free_lane(
    sorted: &[&Appointment],
    placed: &[usize],
    lanes: &[usize],
    idx: usize,
) -> usize {
    let candidate = sorted[idx];
    let near = |m: usize| {
        sorted[m].overlaps(candidate)
            || sorted
                .iter()
                .any(|mid| mid.overlaps(candidate) && mid.overlaps(sorted[m]))
    };

    let taken: Vec<usize> = placed
        .iter()
        .zip(lanes)
        .filter(|&(&m, _)| near(m))
        .map(|(_, &lane)| lane)
        .collect();

    (0..).find(|lane| !taken.contains(lane)).unwrap_or(0)
}

/// Assign every appointment of one day a lane so that no two overlapping
/// appointments share one.
pub fn compute_layout(appointments: &[Appointment]) -> ColumnInfo {
    let sorted = sorted_for_layout(appointments);
    let mut info = ColumnInfo::default();

    for group in overlap_groups(&sorted) {
        let mut lanes: Vec<usize> = Vec::with_capacity(group.len());
        for (pos, &idx) in group.iter().enumerate() {
            let lane = lowest_free_lane(&sorted, &group[..pos], &lanes, idx);
            lanes.push(lane);
            info.columns.insert(sorted[idx].id.clone(), lane);
        }
        let group_max = lanes.iter().copied().max().unwrap_or(0);

        let first = group.iter().map(|&i| sorted[i].start_minutes()).min();
        let last = group.iter().map(|&i| sorted[i].end_minutes()).max();
        if let (Some(first), Some(last)) = (first, last) {
            for hour in hour_span(first, last) {
                let bucket = info.max_columns.entry(hour).or_insert(0);
                *bucket = (*bucket).max(group_max);
            }
        }
    }

    info
}

/// Grid geometry for one appointment.
///
/// Day mode splits the usable width into the lane count of the
/// appointment's hours, so an appointment that overlaps nothing still
/// narrows when it shares a clock hour with a wider group; week mode uses a fixed seven-column grid keyed by
/// weekday (Monday first) and ignores overlap lanes.
pub fn compute_position(appt: &Appointment, info: &ColumnInfo, view: &ViewConfig) -> Position {
    let start = appt.start_minutes() as f64;
    let top = (start - (view.start_hour * 60) as f64) / 60.0 * view.hour_height;
    let height = appt.duration as f64 / 60.0 * view.hour_height;
    let usable = 100.0 - 2.0 * view.page_margin;

    let (left, width) = match view.mode {
        ViewMode::Day => {
            let count = info.column_count(hour_span(appt.start_minutes(), appt.end_minutes()));
            if count <= 1 {
                (view.page_margin, usable)
            } else {
                let width = usable / count as f64;
                let column = info.column_of(&appt.id) as f64;
                (column * width + view.page_margin, width)
            }
        }
        ViewMode::Week => {
            let width = usable / 7.0;
            let column = appt.date.weekday().num_days_from_monday() as f64;
            (column * width + view.page_margin, width)
        }
    };

    Position {
        top,
        height,
        left,
        width,
    }
}

/// Layout plus positions for a set of appointments, in render order.
#[derive(Debug, Clone)]
pub struct DayLayout {
    pub info: ColumnInfo,
    pub placed: Vec<(Appointment, Position)>,
}

impl DayLayout {
    /// Day mode expects a single day's appointments. Week mode ignores
    /// lanes, so a whole week may be passed.
    pub fn build(appointments: &[Appointment], view: &ViewConfig) -> Self {
        let info = compute_layout(appointments);
        let placed = sorted_for_layout(appointments)
            .into_iter()
            .map(|a| (a.clone(), compute_position(a, &info, view)))
            .collect();
        Self { info, placed }
    }
}
