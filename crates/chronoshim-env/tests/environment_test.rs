//! Integration tests for the per-context environment.

use std::thread;

use chrono::{TimeZone, Utc};
use chronoshim_core::clock::Clock;
use chronoshim_core::date::DateArgs;
use chronoshim_core::error::ShimError;
use chronoshim_core::instant::ReferenceInstant;
use chronoshim_env::environment::Environment;
use chronoshim_env::globals::Globals;
use chronoshim_env::script::ShimScript;

fn draws(instant: ReferenceInstant, count: usize) -> Vec<u64> {
    let mut env = Environment::new(instant).unwrap();
    (0..count).map(|_| env.next_random().to_bits()).collect()
}

#[test]
fn test_page_sees_reference_date_and_explicit_date() {
    let instant = ReferenceInstant::from_millis(1_700_000_000_000).unwrap();
    let env = Environment::new(instant).unwrap();

    let now = env.date(&DateArgs::Now);
    let new_year = env.date(&DateArgs::ymd(2020.0, 0.0, 1.0));

    assert_eq!(now.time_value(), Some(1_700_000_000_000));
    assert_eq!(
        new_year.to_datetime(),
        Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
    );
    assert_ne!(now.to_datetime().unwrap().date_naive(), Utc::now().date_naive());
}

#[test]
fn test_every_zero_arg_query_is_the_reference_instant() {
    let instant = ReferenceInstant::from_millis(1_700_000_000_000).unwrap();
    let mut env = Environment::new(instant).unwrap();
    for _ in 0..50 {
        env.next_random();
        assert_eq!(env.now(), instant.as_datetime());
        assert_eq!(env.date(&DateArgs::Now).time_value(), Some(instant.as_millis()));
        #[allow(clippy::cast_precision_loss)]
        let expected = instant.as_millis() as f64;
        assert_eq!(env.date_now().to_bits(), expected.to_bits());
    }
}

#[test]
fn test_random_sequence_reproducible_across_contexts() {
    let instant = ReferenceInstant::from_millis(1_700_000_000_000).unwrap();
    assert_eq!(draws(instant, 1_000), draws(instant, 1_000));
}

#[test]
fn test_random_sequence_reproducible_across_threads() {
    let instant = ReferenceInstant::from_millis(1_234_567_890_123).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || draws(instant, 500)))
        .collect();
    let sequences: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(sequences.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_different_instants_give_different_sequences() {
    let a = ReferenceInstant::from_millis(1_000).unwrap();
    let b = ReferenceInstant::from_millis(2_000).unwrap();
    assert_ne!(draws(a, 10), draws(b, 10));
}

#[test]
fn test_first_draw_for_instant_1000() {
    let instant = ReferenceInstant::from_millis(1000).unwrap();
    let expected = f64::from((1000 * 9301 + 49297) % 233_280) / 233_280.0;
    assert_eq!(draws(instant, 1), vec![expected.to_bits()]);
}

#[test]
fn test_second_install_on_same_context_fails() {
    let instant = ReferenceInstant::from_millis(1000).unwrap();
    let globals = Environment::new(instant).unwrap().into_globals();
    let err = Environment::with_globals(globals, instant).unwrap_err();
    assert_eq!(err, ShimError::AlreadyInstalled);
}

#[test]
fn test_native_globals_read_real_clock_until_installed() {
    let globals = Globals::native();
    let before = Utc::now().timestamp_millis();
    let observed = globals.date().construct(&DateArgs::Now).time_value().unwrap();
    assert!(observed >= before);
}

#[test]
fn test_rendered_script_embeds_same_seed_as_environment() {
    let instant = ReferenceInstant::from_millis(1_700_000_000_000).unwrap();
    let env = Environment::new(instant).unwrap();
    let script = ShimScript::render(env.reference_instant());
    assert!(script.contains(&format!("= {};", env.reference_instant().as_millis())));
}
