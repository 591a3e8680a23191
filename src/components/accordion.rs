//! FAQ accordion with at most one open answer.
//!
//! Expansion state lives in the DOM: each question's `aria-expanded`
//! attribute and the `hidden` flag on its answer, which must be the
//! question's next sibling and carry the answer marker class.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::faq::{ANSWER_CLASS, QUESTION_SELECTOR};
use crate::core::error::DomError;
use crate::models::toggle_plan;
use crate::utils::{dom, log};

pub struct AccordionController {
    /// Questions present at startup; later additions are not tracked.
    questions: Vec<Element>,
}

impl AccordionController {
    /// Returns `None` when the page has no FAQ questions.
    pub fn init() -> Option<Rc<Self>> {
        let questions = dom::query_all(QUESTION_SELECTOR);
        if questions.is_empty() {
            return None;
        }
        let controller = Rc::new(Self { questions });

        for (index, question) in controller.questions.iter().enumerate() {
            let this = Rc::clone(&controller);
            log::warn_on_err(
                "faq question",
                dom::listen(question, "click", move |_: MouseEvent| this.toggle_at(index)),
            );
        }

        Some(controller)
    }

    pub fn questions(&self) -> &[Element] {
        &self.questions
    }

    /// Toggles a tracked question. Untracked elements are ignored.
    pub fn toggle_question(&self, question: &Element) {
        if let Some(index) = self.questions.iter().position(|q| q == question) {
            self.toggle_at(index);
        }
    }

    /// Opens question `index` and closes the rest, or closes everything if
    /// it was already open. No-op if the question has no paired answer.
    pub fn toggle_at(&self, index: usize) {
        let Some(question) = self.questions.get(index) else {
            return;
        };
        if answer_for(question).is_none() {
            return;
        }

        let expanded: Vec<bool> = self.questions.iter().map(is_expanded).collect();
        for (question, open) in self.questions.iter().zip(toggle_plan(&expanded, index)) {
            log::warn_on_err("faq state", set_expanded(question, open));
        }
    }
}

fn is_expanded(question: &Element) -> bool {
    question.get_attribute("aria-expanded").as_deref() == Some("true")
}

fn answer_for(question: &Element) -> Option<HtmlElement> {
    question
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains(ANSWER_CLASS))?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn set_expanded(question: &Element, open: bool) -> Result<(), DomError> {
    dom::set_attribute(question, "aria-expanded", if open { "true" } else { "false" })?;
    if let Some(answer) = answer_for(question) {
        answer.set_hidden(!open);
    }
    Ok(())
}
