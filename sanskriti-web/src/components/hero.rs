//! Rotating monument backdrop with decorative particles.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use sanskriti_core::MonumentData;
use sanskriti_core::constants::HERO_ROTATE_MS;

use crate::dom;
use crate::i18n;

const PARTICLE_COUNT: usize = 20;
// Fixed seed: the particles are decoration, not gameplay, and a stable layout
// avoids pulling browser entropy into the wasm bundle.
const PARTICLE_SEED: u64 = 0x5AD5C1;

#[derive(Clone, PartialEq, Debug)]
struct Particle {
    left_pct: f32,
    delay_s: f32,
    size_px: f32,
}

fn particles() -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(PARTICLE_SEED);
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..6.0),
            size_px: rng.gen_range(2.0..6.0),
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let monuments = use_memo((), |_| MonumentData::load_from_static().monuments);
    let current = use_state(|| 0usize);
    let sparks = use_memo((), |_| particles());

    {
        let current = current.clone();
        let count = monuments.len().max(1);
        use_effect_with(*current, move |&index| {
            spawn_local(async move {
                if dom::sleep_ms(i32::try_from(HERO_ROTATE_MS).unwrap_or(5000))
                    .await
                    .is_ok()
                {
                    current.set((index + 1) % count);
                }
            });
        });
    }

    let (name, image) = monuments
        .get(*current)
        .map(|m| (m.name.clone(), m.image.clone()))
        .unwrap_or_default();

    html! {
        <section class="hero" style={format!("background-image: url('{image}')")}>
            <div class="hero-particles" aria-hidden="true">
                { for sparks.iter().map(|p| html! {
                    <div
                        class="particle"
                        style={format!(
                            "left:{:.1}%;animation-delay:{:.1}s;width:{:.0}px;height:{:.0}px",
                            p.left_pct, p.delay_s, p.size_px, p.size_px
                        )}
                    />
                }) }
            </div>
            <div class="hero-content">
                <span class="hero-badge">{ i18n::t("hero.badge") }</span>
                <h1>{ i18n::t("hero.title") }</h1>
                <p class="hero-subtitle">{ i18n::t("hero.subtitle") }</p>
                <p class="hero-monument">{ name }</p>
                <div class="hero-actions">
                    <a class="btn-primary" href="#ar-experience">{ i18n::t("hero.cta_ar") }</a>
                    <a class="btn-secondary" href="#souvenir-studio">{ i18n::t("hero.cta_souvenir") }</a>
                </div>
            </div>
        </section>
    }
}
