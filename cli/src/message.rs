use lifecount_core::lifespan_message;
use lifecount_core::service::messages::LIFESPAN_MESSAGES;
use rand::Rng;

/// Picks one of the lifespan-change messages at random.
pub fn pick_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    lifespan_message(rng.gen_range(0..LIFESPAN_MESSAGES.len()) as u64)
}

pub fn pick() -> &'static str {
    pick_with(&mut rand::thread_rng())
}
