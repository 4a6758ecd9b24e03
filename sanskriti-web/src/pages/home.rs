//! The single-page experience: every surface composed over shared state.
//!
//! One `RewardLedger` and one `AchievementTracker` live here and flow down as
//! props; all mutation funnels back through the callbacks below so the quiz,
//! the shop, and achievement completions all spend from the same balance.
use yew::prelude::*;

use sanskriti_core::{AchievementData, AchievementTracker, RewardLedger, RewardsData};

use crate::a11y;
use crate::components::{
    ar_viewer::ArViewer, artisans::ArtisansSection, footer::Footer, hero::Hero,
    monument_section::MonumentSection, rewards_panel::RewardsPanel,
    souvenir_studio::SouvenirStudio,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ledger = use_state(|| {
        let rewards = RewardsData::load_from_static();
        RewardLedger::with_owned(rewards.starting_balance, rewards.starting_owned)
    });
    let tracker =
        use_state(|| AchievementTracker::new(AchievementData::load_from_static().achievements));

    let on_ledger_change = {
        let ledger = ledger.clone();
        Callback::from(move |next: RewardLedger| ledger.set(next))
    };

    // Progress events carry the ledger they were computed against, so a
    // surface that just credited coins cannot have that credit overwritten
    // by the completion payout landing on a stale snapshot.
    let on_progress = {
        let ledger = ledger.clone();
        let tracker = tracker.clone();
        Callback::from(move |(id, delta, base): (String, u32, RewardLedger)| {
            let mut next_tracker = (*tracker).clone();
            let mut next_ledger = base;
            next_tracker.record_progress(&id, delta, &mut next_ledger);
            tracker.set(next_tracker);
            ledger.set(next_ledger);
        })
    };

    let on_visit = {
        let ledger = ledger.clone();
        let on_progress = on_progress.clone();
        Callback::from(move |()| {
            on_progress.emit(("heritage-explorer".to_string(), 1, (*ledger).clone()));
        })
    };

    let on_artisan_enquiry = {
        let ledger = ledger.clone();
        let on_progress = on_progress.clone();
        Callback::from(move |()| {
            on_progress.emit(("artisan-supporter".to_string(), 1, (*ledger).clone()));
        })
    };

    html! {
        <div class="sanskriti-app">
            <style>{ a11y::visible_focus_css() }</style>
            <Hero />
            <ArViewer
                ledger={(*ledger).clone()}
                on_progress={on_progress}
            />
            <MonumentSection on_visit={on_visit} />
            <ArtisansSection on_enquiry={on_artisan_enquiry} />
            <RewardsPanel
                ledger={(*ledger).clone()}
                tracker={(*tracker).clone()}
                on_ledger_change={on_ledger_change}
            />
            <SouvenirStudio />
            <Footer />
            <div aria-live="polite" aria-atomic="true" class="sr-only" id="live-status"></div>
        </div>
    }
}
