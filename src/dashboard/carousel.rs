//! Hero carousel on the landing page

use std::time::Duration;

use serde::Serialize;

/// Time each slide stays up before autoplay advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: &'static str,
    pub label: &'static str,
    pub eyebrow: &'static str,
    pub title_main: &'static str,
    pub title_accent: &'static str,
    pub description: &'static str,
    pub primary_cta: CallToAction,
    pub secondary_cta: Option<CallToAction>,
}

pub fn slides() -> Vec<Slide> {
    vec![
        Slide {
            id: "flashcards",
            label: "AI Flashcards",
            eyebrow: "Study smarter with AI",
            title_main: "An AI-powered workspace for",
            title_accent: "creating smarter flashcards.",
            description: "Paste your notes, let the AI suggest questions, and review with a clean, focused interface. Designed for students who want less friction and more flow.",
            primary_cta: CallToAction {
                label: "Go to Flashcards",
                href: "/flashcards",
            },
            secondary_cta: Some(CallToAction {
                label: "Customize Experience",
                href: "/flashcards/login",
            }),
        },
        Slide {
            id: "ai-tutor",
            label: "AI Study Companion",
            eyebrow: "Ask, explore, learn, understand",
            title_main: "Your curious AI tutor for",
            title_accent: "innovative learning.",
            description: "Chat with an AI tutor that not only just give answers, but guides you with questions, examples, and analogies tailored to how to learn.",
            primary_cta: CallToAction {
                label: "Try the AI Tutor",
                href: "/ai-tutor",
            },
            secondary_cta: Some(CallToAction {
                label: "Learn More",
                href: "/ai-tutor#learn-more",
            }),
        },
        Slide {
            id: "study-planner",
            label: "Learning Paths",
            eyebrow: "From chaos to clarity",
            title_main: "Plan your learning journey with",
            title_accent: "smart, adaptive curricula",
            description: "Group topics, estimate effort, and let AI suggest a learning path that fits your time and goals. Great for self-study and project based learning.",
            primary_cta: CallToAction {
                label: "Design a learning path",
                href: "/study-planner",
            },
            secondary_cta: Some(CallToAction {
                label: "View example roadmaps",
                href: "/study-planner#examples",
            }),
        },
        Slide {
            id: "learning-forum",
            label: "Learning Forum",
            eyebrow: "Collaborate, discuss, grow",
            title_main: "Join a community-driven",
            title_accent: "learning forum.",
            description: "Engage with fellow learners, share insights, ask questions, and grow together in a supportive environment designed to enhance your educational journey.",
            primary_cta: CallToAction {
                label: "Visit the Learning Forum",
                href: "/learning-forum",
            },
            secondary_cta: Some(CallToAction {
                label: "Sign Up Now",
                href: "/learning-forum/signup",
            }),
        },
    ]
}

/// Slide-in direction of the last transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    active: usize,
    direction: Direction,
    /// Time accumulated toward the next autoplay step
    pending: Duration,
}

impl Carousel {
    /// Returns `None` for an empty slide list
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            slides,
            active: 0,
            direction: Direction::default(),
            pending: Duration::ZERO,
        })
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn next(&mut self) {
        self.direction = Direction::Right;
        self.active = (self.active + 1) % self.slides.len();
        self.pending = Duration::ZERO;
    }

    pub fn prev(&mut self) {
        self.direction = Direction::Left;
        self.active = (self.active + self.slides.len() - 1) % self.slides.len();
        self.pending = Duration::ZERO;
    }

    /// Jump to `index`; out-of-range indexes are ignored
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        self.direction = if index > self.active {
            Direction::Right
        } else {
            Direction::Left
        };
        self.active = index;
        self.pending = Duration::ZERO;
        true
    }

    /// Advance autoplay by `elapsed`, moving one slide per full interval
    pub fn tick(&mut self, elapsed: Duration) {
        self.pending += elapsed;
        while self.pending >= AUTOPLAY_INTERVAL {
            let carry = self.pending - AUTOPLAY_INTERVAL;
            self.next();
            self.pending = carry;
        }
    }

    /// "2 / 4" style position label
    pub fn counter(&self) -> String {
        format!("{} / {}", self.active + 1, self.slides.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(slides()).unwrap()
    }

    #[test]
    fn test_empty_carousel() {
        assert!(Carousel::new(Vec::new()).is_none());
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut c = carousel();
        c.prev();
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.direction(), Direction::Left);
        c.next();
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.direction(), Direction::Right);
        assert_eq!(c.current().id, "flashcards");
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut c = carousel();
        assert!(c.go_to(2));
        assert_eq!(c.direction(), Direction::Right);
        assert!(c.go_to(1));
        assert_eq!(c.direction(), Direction::Left);
        assert!(!c.go_to(9));
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.counter(), "2 / 4");
    }

    #[test]
    fn test_autoplay_tick() {
        let mut c = carousel();
        c.tick(Duration::from_secs(4));
        assert_eq!(c.active_index(), 0);
        c.tick(Duration::from_secs(1));
        assert_eq!(c.active_index(), 1);
        c.tick(Duration::from_secs(11));
        assert_eq!(c.active_index(), 3);
        // 1s carried over; manual navigation drops it
        c.prev();
        c.tick(Duration::from_secs(4));
        assert_eq!(c.active_index(), 2);
        c.tick(Duration::from_secs(1));
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn test_slides_link_to_their_pages() {
        let slides = slides();
        let ids: Vec<&str> = slides.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["flashcards", "ai-tutor", "study-planner", "learning-forum"]);
        for slide in &slides {
            assert_eq!(slide.primary_cta.href, format!("/{}", slide.id));
            let secondary = slide.secondary_cta.as_ref().unwrap();
            assert!(secondary.href.starts_with(slide.primary_cta.href));
        }
    }
}
