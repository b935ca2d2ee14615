use std::collections::BTreeSet;

use crate::models::{Habit, Recommendation};

/// Packs habits into the available time, one cluster at a time.
///
/// Clusters are visited shortest first. Within a cluster habits are taken
/// in load order until the next one would overflow `available_time`; the
/// scan stops there rather than skipping ahead. Clusters that yield no
/// habits are left out.
pub fn recommend_habits(habits: &[Habit], available_time: f64) -> Vec<Recommendation> {
    let clusters: BTreeSet<usize> = habits.iter().map(|h| h.ordered_cluster).collect();
    let mut recommendations = Vec::new();

    for cluster in clusters {
        let mut total_time = 0.0;
        let mut selected = Vec::new();

        for habit in habits.iter().filter(|h| h.ordered_cluster == cluster) {
            if total_time + habit.time_needed > available_time {
                break;
            }
            selected.push(habit.name.clone());
            total_time += habit.time_needed;
        }

        if !selected.is_empty() {
            recommendations.push(Recommendation {
                cluster,
                habits: selected,
                total_time,
            });
        }
    }

    recommendations
}
