//! Question section: teaser, the automatic narrative, then the Yes/No
//! confirmation and the final answer. Confetti is added by the tick route
//! on the one response that reaches the final step.

use crate::card::confirmation::{Confirmation, ConfirmationStep};
use crate::card::narrative::Narrative;
use crate::card::sequencer::Sequencer;
use crate::config::{CardConfig, QuestionConfig};
use crate::views::{QUESTION_ID, beacon, escape, heart_icon, js_string, section};

const ALERT_ID: &str = "question-alert";

const PINK_BUTTON: &str = "bg-pink-500 text-white font-bold py-3 px-10 rounded-full shadow-lg hover:bg-pink-600 transition-all duration-300 transform hover:scale-110";

pub fn render_question_section(config: &CardConfig, seq: &Sequencer) -> String {
    let body = format!(
        r#"<div id="{}" class="min-h-[250px] flex items-center justify-center">{}</div><div id="{}" hidden></div>"#,
        QUESTION_ID,
        render_question_stage(config, seq),
        ALERT_ID
    );
    section("question", &config.question.title, &body)
}

/// Contents of the question swap container.
pub fn render_question_stage(config: &CardConfig, seq: &Sequencer) -> String {
    let q = &config.question;
    let narrative = seq.narrative();
    if !narrative.step().is_started() {
        render_teaser(q)
    } else if !narrative.step().is_terminal() {
        render_narrative(q, narrative)
    } else {
        render_confirmation(q, seq.confirmation())
    }
}

fn render_teaser(q: &QuestionConfig) -> String {
    format!(
        r##"<div class="animate-fade-in">
  <p class="text-lg mb-8">{teaser}</p>
  <button hx-post="/api/question/begin" hx-target="#{target}" hx-swap="innerHTML" class="{btn} flex items-center justify-center mx-auto">{label}{heart}</button>
</div>"##,
        teaser = escape(&q.teaser),
        target = QUESTION_ID,
        btn = PINK_BUTTON,
        label = escape(&q.open_label),
        heart = heart_icon("w-5 h-5 ml-2"),
    )
}

fn render_narrative(q: &QuestionConfig, narrative: &Narrative) -> String {
    let shown = narrative.step().visible_lines();
    let mut html = String::from(r#"<div class="w-full space-y-4">"#);
    for (i, line) in q.narrative.iter().take(shown).enumerate() {
        let emphasis = if i + 1 == shown {
            "text-2xl md:text-3xl text-gray-700"
        } else {
            "text-lg text-gray-400"
        };
        html.push_str(&format!(
            r#"<p class="narrative-line animate-fade-in {}">{}</p>"#,
            emphasis,
            escape(line)
        ));
    }
    html.push_str("</div>");
    if let Some(timer) = narrative.pending() {
        html.push_str(&beacon(timer));
    }
    html
}

fn render_confirmation(q: &QuestionConfig, confirmation: &Confirmation) -> String {
    let step = confirmation.step();
    let mut html = String::with_capacity(1024);

    match step {
        ConfirmationStep::Choice => {
            html.push_str(&format!(
                r##"<div class="animate-fade-in w-full">
  <p class="text-3xl md:text-4xl text-gray-700 mb-8 max-w-2xl mx-auto">{prompt}</p>
  <div class="flex justify-center gap-6 mt-10">
    <button hx-post="/api/question/yes" hx-target="#{target}" hx-swap="innerHTML" class="bg-green-500 text-white font-bold py-3 px-10 rounded-full shadow-lg hover:bg-green-600 transition-all duration-300 transform hover:scale-110">{yes}</button>
    <button hx-post="/api/question/no" hx-target="#{alert}" hx-swap="innerHTML" class="bg-red-500 text-white font-bold py-3 px-10 rounded-full shadow-lg hover:bg-red-600 transition-all duration-300 transform hover:scale-110">{no}</button>
  </div>
</div>"##,
                prompt = escape(&q.prompt),
                target = QUESTION_ID,
                alert = ALERT_ID,
                yes = escape(&q.yes_label),
                no = escape(&q.no_label),
            ));
        }
        ConfirmationStep::Salting => {
            html.push_str(&format!(
                r#"<div class="animate-fade-in w-full"><p class="text-2xl md:text-3xl mb-6">{}</p></div>"#,
                escape(&q.salting)
            ));
        }
        ConfirmationStep::Final => {
            html.push_str(&format!(
                r#"<div class="animate-fade-in w-full"><p class="mt-8 text-3xl font-bold text-pink-600">{}</p></div>"#,
                escape(&q.final_message)
            ));
        }
        _ => {
            let Some(prompt) = step.escalation_index().and_then(|i| q.escalation.get(i)) else {
                return String::new();
            };
            html.push_str(r#"<div class="animate-fade-in w-full flex flex-col items-center justify-center">"#);
            html.push_str(&format!(
                r#"<p class="text-2xl md:text-3xl mb-6">{}</p>"#,
                escape(&prompt.text)
            ));
            if let Some(label) = &prompt.button {
                html.push_str(&format!(
                    r##"<button hx-post="/api/question/yes" hx-target="#{}" hx-swap="innerHTML" class="{}">{}</button>"##,
                    QUESTION_ID,
                    PINK_BUTTON,
                    escape(label)
                ));
            }
            html.push_str("</div>");
        }
    }

    if let Some(timer) = confirmation.pending() {
        html.push_str(&beacon(timer));
    }
    html
}

/// Response to "No": a playful nudge back towards "Yes".
pub fn render_no_alert(config: &CardConfig) -> String {
    format!("<script>alert({});</script>", js_string(&config.question.no_alert))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::intro::OPEN_REVEAL_MS;
    use crate::card::narrative::total_delay_ms;

    fn opened() -> Sequencer {
        let mut seq = Sequencer::new();
        seq.open();
        seq.advance_by(OPEN_REVEAL_MS);
        seq
    }

    #[test]
    fn teaser_before_begin() {
        let html = render_question_stage(&CardConfig::default(), &opened());
        assert!(html.contains("Buka Pertanyaan"));
        assert!(html.contains("/api/question/begin"));
    }

    #[test]
    fn narrative_lines_accumulate() {
        let config = CardConfig::default();
        let mut seq = opened();
        seq.begin_question();
        let html = render_question_stage(&config, &seq);
        assert_eq!(html.matches("narrative-line").count(), 1);
        assert!(html.contains("load delay:2000ms"));
        seq.advance_by(2000 + 2500);
        let html = render_question_stage(&config, &seq);
        assert_eq!(html.matches("narrative-line").count(), 3);
        assert!(html.contains("load delay:3000ms"));
    }

    #[test]
    fn terminal_narrative_presents_choice() {
        let mut seq = opened();
        seq.begin_question();
        seq.advance_by(total_delay_ms());
        let html = render_question_stage(&CardConfig::default(), &seq);
        assert!(html.contains("Will you be my girlfriend"));
        assert!(html.contains("/api/question/yes"));
        assert!(html.contains("/api/question/no"));
        assert!(!html.contains("narrative-line"));
    }

    #[test]
    fn escalation_and_final() {
        let config = CardConfig::default();
        let mut seq = opened();
        seq.begin_question();
        seq.advance_by(total_delay_ms());
        seq.confirm_yes();
        assert!(render_question_stage(&config, &seq).contains("Iya, yakin banget!"));
        seq.confirm_yes();
        seq.confirm_yes();
        seq.confirm_yes();
        let promise = render_question_stage(&config, &seq);
        assert!(promise.contains("Oke, aku pegang janjimu ya..."));
        assert!(!promise.contains("/api/question/yes"));
        assert!(promise.contains("load delay:2000ms"));
        seq.advance_by(2000);
        let salting = render_question_stage(&config, &seq);
        assert!(salting.contains("yeaaaayyyy (salting)"));
        assert!(salting.contains("load delay:2500ms"));
        seq.advance_by(2500);
        let last = render_question_stage(&config, &seq);
        assert!(last.contains("SO NOW I CAN CALL U MY DARLING"));
        assert!(!last.contains("confetti-container"));
        assert!(!last.contains("/api/card/tick"));
    }

    #[test]
    fn no_alert_is_script() {
        let html = render_no_alert(&CardConfig::default());
        assert!(html.starts_with("<script>alert("));
        assert!(html.contains("Coba klik"));
    }
}
