//! Example: deal items to two consumers and watch the histories at work
//!
//! Run with: cargo run -p dealer-core --example deal_loop

use dealer_core::{Dealer, Lcg32};

fn main() {
    let pool = [
        "cats/tabby.jpg",
        "cats/siamese.jpg",
        "work/deadline.jpg",
        "work/meeting.jpg",
        "sad/rain.jpg",
    ];

    // Fixed seed so the output is the same on every run.
    let mut dealer = Dealer::with_source(3, Lcg32::new(42));

    for round in 1..=6 {
        let alice = dealer.deal(&pool, "alice").unwrap();
        let bob = dealer.deal(&pool, "bob").unwrap();
        println!("round {round}: alice <- {alice}, bob <- {bob}");
    }

    let window: Vec<&&str> = dealer.recent().collect();
    println!("\nshared recent window (oldest first): {window:?}");
    println!(
        "alice has seen {} items, bob {}",
        dealer.seen_by(&"alice").map_or(0, |s| s.len()),
        dealer.seen_by(&"bob").map_or(0, |s| s.len()),
    );
}
