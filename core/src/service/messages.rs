/// Short lines shown briefly after the assumed lifespan is changed.
pub const LIFESPAN_MESSAGES: [&str; 8] = [
    "A spring just disappeared.",
    "There are fewer Sunday nights now.",
    "Still, it is not infinite.",
    "Time has been shaved away.",
    "Another birthday, gone.",
    "The end draws closer.",
    "Just a number. Still a fact.",
    "Fewer chances to see the cherry blossoms.",
];

/// Picks a message; any `seed` is valid.
pub fn lifespan_message(seed: u64) -> &'static str {
    LIFESPAN_MESSAGES[(seed % LIFESPAN_MESSAGES.len() as u64) as usize]
}
