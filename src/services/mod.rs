pub mod chatbot;
pub mod clustering;
pub mod decision_tree;
pub mod habit_advisor;
pub mod music;
pub mod planner;
pub mod sentiment;
pub mod writing;

pub use chatbot::Chatbot;
pub use clustering::{cluster_habits, KMeans};
pub use habit_advisor::{AdvisorError, HabitAdvisor};
pub use music::MusicLibrary;
pub use planner::recommend_habits;
pub use sentiment::{SentimentScorer, VaderScorer};
