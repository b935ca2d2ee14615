use serde::{Deserialize, Serialize};

/// Row of `habits_data.csv`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HabitRecord {
    pub habit_name: String,
    /// Minutes the habit takes
    pub time_needed: f64,
}

/// A habit after clustering
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Habit {
    pub name: String,
    pub time_needed: f64,
    /// Raw cluster id from the K-means fit
    pub cluster: usize,
    /// Rank of the cluster by ascending mean `time_needed` (0 = shortest)
    pub ordered_cluster: usize,
}

/// Habits picked from one cluster to fit a time budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Ordered cluster the habits were taken from
    pub cluster: usize,
    pub habits: Vec<String>,
    pub total_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_serialization() {
        let rec = Recommendation {
            cluster: 0,
            habits: vec!["Drink water".to_string()],
            total_time: 2.0,
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["cluster"], 0);
        assert_eq!(json["habits"][0], "Drink water");
        assert_eq!(json["total_time"], 2.0);
    }

    #[test]
    fn test_habit_record_from_csv() {
        let data = "habit_name,time_needed\nStretch,5\nRead a chapter,22.5\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<HabitRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].habit_name, "Stretch");
        assert_eq!(rows[0].time_needed, 5.0);
        assert_eq!(rows[1].time_needed, 22.5);
    }
}
