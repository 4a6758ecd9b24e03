//! Presentational quiz card: options, reveal styling, and the fact panel.
use std::collections::BTreeMap;
use yew::prelude::*;

use sanskriti_core::constants::QUIZ_BONUS_COINS;
use sanskriti_core::{QuizEngine, QuizPhase};

use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct QuizCardProps {
    pub engine: QuizEngine,
    pub on_answer: Callback<usize>,
}

#[function_component(QuizCard)]
pub fn quiz_card(props: &QuizCardProps) -> Html {
    let question = props.engine.current_question().clone();
    let phase = props.engine.phase();
    let revealed = matches!(phase, QuizPhase::AnswerSelected { .. });

    html! {
        <div class="quiz-card">
            <h3>{ i18n::t("quiz.title") }</h3>
            <p class="quiz-prompt">{ question.prompt.clone() }</p>
            <div class="quiz-options" role="group" aria-label={i18n::t("quiz.title")}>
                { for question.options.iter().enumerate().map(|(index, option)| {
                    let mut classes = classes!("quiz-option");
                    if let QuizPhase::AnswerSelected { answer, correct } = phase {
                        if index == answer {
                            classes.push(if correct { "correct" } else { "wrong" });
                        }
                    }
                    let on_click = {
                        let on_answer = props.on_answer.clone();
                        Callback::from(move |_| on_answer.emit(index))
                    };
                    html! {
                        <button class={classes} onclick={on_click} disabled={revealed}>
                            { option.clone() }
                        </button>
                    }
                }) }
            </div>
            { if let QuizPhase::AnswerSelected { correct, .. } = phase {
                let coins = QUIZ_BONUS_COINS.to_string();
                let mut vars = BTreeMap::new();
                vars.insert("coins", coins.as_str());
                html! {
                    <div class="quiz-fact" role="status">
                        <p>
                            <strong>{ i18n::t("quiz.fact_label") }</strong>
                            { " " }
                            { question.fact.clone() }
                        </p>
                        { if correct {
                            html! { <p class="quiz-earned">{ i18n::tr("quiz.earned", Some(&vars)) }</p> }
                        } else {
                            html! {}
                        } }
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
