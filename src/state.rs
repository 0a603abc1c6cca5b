//! Modal lifecycle as an explicit state machine.
//!
//! A [`QuizSession`] only exists while the modal is open: it is built on the
//! closed → open edge and dropped on close, so nothing from a previous run
//! (index, help text, selection) can leak into the next one.

/// Events a host can react to. Nothing here is scored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Opened,
    Closed,
    Navigated { index: usize },
    Submitted { question_key: String, selection: Vec<String> },
}

/// Selection for the question currently on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponsesState {
    question: usize,
    selection: Vec<String>,
}

impl ResponsesState {
    pub fn for_question(question: usize) -> Self {
        Self {
            question,
            selection: Vec::new(),
        }
    }

    pub fn question(&self) -> usize {
        self.question
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Vec<String> {
        &mut self.selection
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    index: usize,
    total: usize,
    help_shown: bool,
    responses: ResponsesState,
}

impl QuizSession {
    fn start(total: usize) -> Self {
        Self {
            index: 0,
            total,
            help_shown: false,
            responses: ResponsesState::for_question(0),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn header(&self) -> String {
        format!("Question {}/{}", self.index + 1, self.total)
    }

    pub fn help_shown(&self) -> bool {
        self.help_shown
    }

    pub fn toggle_help(&mut self) {
        self.help_shown = !self.help_shown;
    }

    pub fn responses(&self) -> &ResponsesState {
        &self.responses
    }

    pub fn responses_mut(&mut self) -> &mut ResponsesState {
        &mut self.responses
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    /// Moves to `index` if it is in range. The selection starts over on
    /// every move. Returns whether the index changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total || index == self.index {
            return false;
        }
        self.index = index;
        self.responses = ResponsesState::for_question(index);
        log::debug!("quiz moved to question {}/{}", index + 1, self.total);
        true
    }

    pub fn next(&mut self) -> bool {
        self.has_next() && self.go_to(self.index + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.has_previous() && self.go_to(self.index - 1)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(QuizSession),
}

impl ModalState {
    /// Closed → open. Returns `true` only on that edge; opening an open
    /// modal keeps its session. An empty quiz never opens.
    pub fn open(&mut self, total: usize) -> bool {
        match self {
            ModalState::Open(_) => false,
            ModalState::Closed if total == 0 => {
                log::warn!("refusing to open a quiz without questions");
                false
            }
            ModalState::Closed => {
                *self = ModalState::Open(QuizSession::start(total));
                log::debug!("quiz modal opened ({total} questions)");
                true
            }
        }
    }

    /// Open → closed. Returns `true` only on that edge.
    pub fn close(&mut self) -> bool {
        match std::mem::take(self) {
            ModalState::Open(_) => {
                log::debug!("quiz modal closed");
                true
            }
            ModalState::Closed => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match self {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match self {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_starts_at_the_first_question() {
        let mut modal = ModalState::default();
        assert!(modal.open(3));
        let session = modal.session().unwrap();
        assert_eq!(session.index(), 0);
        assert_eq!(session.header(), "Question 1/3");
        assert!(!session.help_shown());
        assert!(session.responses().selection().is_empty());
    }

    #[test]
    fn reopening_discards_the_previous_session() {
        let mut modal = ModalState::default();
        modal.open(3);
        {
            let session = modal.session_mut().unwrap();
            session.next();
            session.next();
            session.toggle_help();
            session.responses_mut().selection_mut().push("a".into());
        }
        assert_eq!(modal.session().unwrap().index(), 2);

        assert!(modal.close());
        assert!(modal.session().is_none());
        assert!(modal.open(3));

        let session = modal.session().unwrap();
        assert_eq!(session.index(), 0);
        assert!(!session.help_shown());
        assert!(session.responses().selection().is_empty());
    }

    #[test]
    fn open_is_idempotent_while_open() {
        let mut modal = ModalState::default();
        assert!(modal.open(2));
        modal.session_mut().unwrap().next();
        assert!(!modal.open(2));
        assert_eq!(modal.session().unwrap().index(), 1);
    }

    #[test]
    fn close_only_reports_the_edge() {
        let mut modal = ModalState::default();
        assert!(!modal.close());
        modal.open(1);
        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn empty_quiz_never_opens() {
        let mut modal = ModalState::default();
        assert!(!modal.open(0));
        assert!(!modal.is_open());
    }

    #[test]
    fn navigation_is_bounded_and_resets_selection() {
        let mut modal = ModalState::default();
        modal.open(2);
        let session = modal.session_mut().unwrap();

        assert!(!session.has_previous());
        assert!(!session.previous());

        session.responses_mut().selection_mut().push("a".into());
        assert!(session.next());
        assert_eq!(session.header(), "Question 2/2");
        assert_eq!(session.responses().question(), 1);
        assert!(session.responses().selection().is_empty());

        assert!(!session.has_next());
        assert!(!session.next());
        assert!(!session.go_to(7));
        assert!(!session.go_to(1));
        assert_eq!(session.index(), 1);

        assert!(session.previous());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn help_toggles() {
        let mut modal = ModalState::default();
        modal.open(1);
        let session = modal.session_mut().unwrap();
        session.toggle_help();
        assert!(session.help_shown());
        session.toggle_help();
        assert!(!session.help_shown());
        assert_eq!(session.index(), 0);
    }
}
