//! Integration tests for the `ParticleType` derive macro.
//!
//! These tests verify the generated code by using the derived
//! implementations on enums defined outside the library.

use wsf::ParticleType;

#[derive(ParticleType, Clone, Copy, PartialEq, Debug)]
enum Element {
    Water,
    Smoke,
    Fire,
}

#[test]
fn test_particle_type_into_u32() {
    let water: u32 = Element::Water.into();
    let smoke: u32 = Element::Smoke.into();
    let fire: u32 = Element::Fire.into();

    assert_eq!(water, 0);
    assert_eq!(smoke, 1);
    assert_eq!(fire, 2);
}

#[test]
fn test_particle_type_from_u32() {
    let water: Element = 0u32.into();
    let smoke: Element = 1u32.into();
    let fire: Element = 2u32.into();

    assert_eq!(water, Element::Water);
    assert_eq!(smoke, Element::Smoke);
    assert_eq!(fire, Element::Fire);
}

#[test]
fn test_particle_type_invalid_u32_defaults_to_first() {
    let invalid: Element = 99u32.into();
    assert_eq!(invalid, Element::Water);
}

#[test]
fn test_particle_type_count() {
    assert_eq!(Element::count(), 3);
}

#[test]
fn test_next_wraps_after_last() {
    assert_eq!(Element::Water.next(), Element::Smoke);
    assert_eq!(Element::Smoke.next(), Element::Fire);
    assert_eq!(Element::Fire.next(), Element::Water);
}

#[test]
fn test_prev_wraps_before_first() {
    assert_eq!(Element::Water.prev(), Element::Fire);
    assert_eq!(Element::Fire.prev(), Element::Smoke);
    assert_eq!(Element::Smoke.prev(), Element::Water);
}

#[test]
fn test_next_then_prev_is_identity() {
    for e in [Element::Water, Element::Smoke, Element::Fire] {
        assert_eq!(e.next().prev(), e);
        assert_eq!(e.prev().next(), e);
    }
}

#[test]
fn test_label_is_upper_case_name() {
    assert_eq!(Element::Water.label(), "WATER");
    assert_eq!(Element::Smoke.label(), "SMOKE");
    assert_eq!(Element::Fire.label(), "FIRE");
}

#[derive(ParticleType, Clone, Copy, PartialEq, Debug)]
enum SingleVariant {
    Only,
}

#[test]
fn test_single_variant_particle_type() {
    assert_eq!(SingleVariant::count(), 1);
    assert_eq!(SingleVariant::Only.next(), SingleVariant::Only);
    assert_eq!(SingleVariant::Only.prev(), SingleVariant::Only);
    let back: SingleVariant = 0u32.into();
    assert_eq!(back, SingleVariant::Only);
}

#[derive(ParticleType, Clone, Copy, PartialEq, Debug)]
enum ManyVariants {
    A, B, C, D, E, F, G, H,
}

#[test]
fn test_many_variants_particle_type() {
    assert_eq!(ManyVariants::count(), 8);
    assert_eq!(u32::from(ManyVariants::A), 0);
    assert_eq!(u32::from(ManyVariants::H), 7);
    assert_eq!(ManyVariants::H.next(), ManyVariants::A);
    assert_eq!(ManyVariants::A.prev(), ManyVariants::H);
    assert_eq!(ManyVariants::D.label(), "D");
}

#[test]
fn test_builtin_kind_cycles_like_the_derive() {
    use wsf::ParticleKind;

    let mut kind = ParticleKind::default();
    for _ in 0..ParticleKind::count() {
        kind = kind.next();
    }
    assert_eq!(kind, ParticleKind::Water);
    assert_eq!(kind.next(), ParticleKind::Smoke);
}
