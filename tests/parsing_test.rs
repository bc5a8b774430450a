//! Generated USS read back through the stylesheet reader.

use proptest::prelude::*;

use typeuss::parse::parse_uss;
use typeuss::style::{Color, Length, LengthUnit, Repeat};
use typeuss::{Selector, Style, generate_uss};

fn arb_selector() -> impl Strategy<Value = Selector> {
    let name = "[a-z][a-z0-9-]{0,10}";
    (name, name, 0usize..6).prop_map(|(a, b, kind)| {
        let first = Selector::class(a);
        let second = Selector::type_name(b);
        match kind {
            0 => first,
            1 => first.hover(),
            2 => first.child(&second),
            3 => first.adjacent(&second),
            4 => second.and(&first).focus(),
            _ => first.descendant(&second),
        }
    })
}

#[derive(Debug, Clone)]
enum Setter {
    Width(f32, u8),
    Color(f32, f32, f32, f32),
    Grow(f32),
    Padding(f32, f32),
    Repeat(u8),
}

fn arb_setter() -> impl Strategy<Value = Setter> {
    prop_oneof![
        (-500.0f32..500.0, 0u8..4).prop_map(|(v, u)| Setter::Width(v, u)),
        (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)
            .prop_map(|(r, g, b, a)| Setter::Color(r, g, b, a)),
        (0.0f32..10.0).prop_map(Setter::Grow),
        (0.0f32..64.0, 0.0f32..64.0).prop_map(|(v, h)| Setter::Padding(v, h)),
        (0u8..4).prop_map(Setter::Repeat),
    ]
}

fn unit(u: u8) -> LengthUnit {
    match u {
        0 => LengthUnit::Pixel,
        1 => LengthUnit::Percent,
        2 => LengthUnit::Auto,
        _ => LengthUnit::None,
    }
}

fn repeat(r: u8) -> Repeat {
    match r {
        0 => Repeat::NoRepeat,
        1 => Repeat::Repeat,
        2 => Repeat::Round,
        _ => Repeat::Space,
    }
}

fn arb_style() -> impl Strategy<Value = Style> {
    (arb_selector(), prop::collection::vec(arb_setter(), 0..8)).prop_map(|(selector, setters)| {
        selector.style(|s| {
            for setter in &setters {
                match *setter {
                    Setter::Width(v, u) => s.width(Length::new(v, unit(u))),
                    Setter::Color(r, g, b, a) => s.color(Color::rgba(r, g, b, a)),
                    Setter::Grow(v) => s.flex_grow(v),
                    Setter::Padding(v, h) => s.padding2(v, h),
                    Setter::Repeat(r) => s.background_repeat(repeat(r), Repeat::NoRepeat),
                };
            }
        })
    })
}

#[test]
fn test_reads_back_generated_sheet() {
    let styles = [
        Selector::class("btn").hover().style(|s| {
            s.background_color(Color::rgba(0.0, 0.5, 1.0, 0.25))
                .rotate(90.0);
        }),
        Selector::all().style(|s| {
            s.margin(0.0);
        }),
    ];

    let rules = parse_uss(&generate_uss(&styles));
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].selector, ".btn:hover");
    assert_eq!(rules[0].properties, styles[0].properties());
    assert_eq!(rules[1].selector, "*");
}

proptest! {
    #[test]
    fn prop_reader_recovers_generated_rules(styles in prop::collection::vec(arb_style(), 0..6)) {
        let rules = parse_uss(&generate_uss(&styles));
        prop_assert_eq!(rules.len(), styles.len());
        for (rule, style) in rules.iter().zip(&styles) {
            prop_assert_eq!(rule.selector.as_str(), style.selector().text());
            prop_assert_eq!(rule.properties.as_slice(), style.properties());
        }
    }

    #[test]
    fn prop_generation_is_idempotent(styles in prop::collection::vec(arb_style(), 0..6)) {
        let first = generate_uss(&styles);
        let rebuilt: Vec<Style> = styles.clone();
        prop_assert_eq!(first, generate_uss(&rebuilt));
    }
}
