use rand::Rng;

use crate::models::Mood;

const GOOD_PROMPTS: [&str; 4] = [
    "Describe a recent accomplishment you're proud of.",
    "What is something that made you smile today?",
    "Write about a time when you helped someone.",
    "Share a memorable moment with friends or family.",
];

const NEUTRAL_PROMPTS: [&str; 4] = [
    "What is a daily routine you enjoy?",
    "Write about something interesting you learned recently.",
    "Describe a place you like to visit.",
    "What are your thoughts on the weather today?",
];

const BAD_PROMPTS: [&str; 4] = [
    "Write about a challenge you're currently facing.",
    "What is something that has been bothering you lately?",
    "Describe a moment when you felt overwhelmed.",
    "What do you wish you could change about your day?",
];

const GOOD_FEEDBACK: [&str; 4] = [
    "That's wonderful to hear! Keep building on that positive energy.",
    "It's great to celebrate your achievements! What's next for you?",
    "Helping others is such a rewarding experience!",
    "Cherish those moments with your loved ones!",
];

const NEUTRAL_FEEDBACK: [&str; 4] = [
    "It's nice to have routines that bring you comfort.",
    "Learning new things can be so enriching; keep exploring!",
    "Having a favorite place can provide a great escape.",
    "Weather can impact our mood; what do you enjoy most about it?",
];

const BAD_FEEDBACK: [&str; 4] = [
    "I'm sorry to hear that. Remember, this is just a moment in time.",
    "Challenges are tough, but they help us grow.",
    "Feeling overwhelmed is valid; take a deep breath.",
    "It's okay to wish for change; sometimes we need to take small steps.",
];

/// Journaling prompts for a mood
pub fn prompts(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Good => &GOOD_PROMPTS,
        Mood::Neutral => &NEUTRAL_PROMPTS,
        Mood::Bad => &BAD_PROMPTS,
    }
}

/// Empathetic replies to a journal entry written in a mood
pub fn feedback_lines(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Good => &GOOD_FEEDBACK,
        Mood::Neutral => &NEUTRAL_FEEDBACK,
        Mood::Bad => &BAD_FEEDBACK,
    }
}

/// Uniformly picks a journaling prompt
pub fn writing_prompt<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> &'static str {
    pick(prompts(mood), rng)
}

/// Uniformly picks feedback for a finished entry
pub fn feedback<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> &'static str {
    pick(feedback_lines(mood), rng)
}

fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}
