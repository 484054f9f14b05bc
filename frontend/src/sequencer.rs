//! Timed tab switching for the tabbed layout.
//!
//! A switch is a fixed list of steps, each applied after its own delay. The
//! first step always runs immediately; the page drives the rest with one
//! `Timeout` at a time, keyed on [`TabSequencer::epoch`], so dropping that
//! timeout stops the whole sequence.
//!
//! Requests that arrive mid-sequence are not interleaved. The latest one is
//! queued and replayed once the running sequence has shown its content,
//! unless it targets the tab that is already on screen.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::content::Tab;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Mobile,
    Desktop,
}

impl Profile {
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT_PX {
            Profile::Mobile
        } else {
            Profile::Desktop
        }
    }

    fn steps(self) -> &'static [Step] {
        match self {
            Profile::Mobile => &MOBILE_STEPS,
            Profile::Desktop => &DESKTOP_STEPS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    HideContent,
    HideButton,
    CloseMenu,
    Commit,
    ShowContent,
    ShowButton,
}

/// Where a running switch stands. Each step enters the phase it is labelled
/// with; the final step's `FadingIn` hands straight back to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FadingOut,
    Committing,
    FadingIn,
}

struct Step {
    wait_ms: u32,
    actions: &'static [Action],
    phase: Phase,
}

const MOBILE_STEPS: [Step; 4] = [
    Step { wait_ms: 0, actions: &[Action::HideContent], phase: Phase::FadingOut },
    Step { wait_ms: 50, actions: &[Action::CloseMenu], phase: Phase::FadingOut },
    Step { wait_ms: 300, actions: &[Action::Commit], phase: Phase::Committing },
    Step { wait_ms: 300, actions: &[Action::ShowContent], phase: Phase::FadingIn },
];

const DESKTOP_STEPS: [Step; 3] = [
    Step { wait_ms: 0, actions: &[Action::HideContent, Action::HideButton], phase: Phase::FadingOut },
    Step { wait_ms: 500, actions: &[Action::Commit], phase: Phase::Committing },
    Step { wait_ms: 200, actions: &[Action::ShowContent, Action::ShowButton], phase: Phase::FadingIn },
];

/// Everything the tabbed page renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    pub selected: Tab,
    pub content_visible: bool,
    pub button_visible: bool,
    pub menu_open: bool,
}

impl Default for TabView {
    fn default() -> Self {
        Self {
            selected: Tab::default(),
            content_visible: true,
            button_visible: true,
            menu_open: false,
        }
    }
}

impl TabView {
    fn apply(&mut self, action: Action, target: Tab) {
        match action {
            Action::HideContent => self.content_visible = false,
            Action::HideButton => self.button_visible = false,
            Action::CloseMenu => self.menu_open = false,
            Action::Commit => self.selected = target,
            Action::ShowContent => self.content_visible = true,
            Action::ShowButton => self.button_visible = true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Run {
    target: Tab,
    profile: Profile,
    next: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSequencer {
    view: TabView,
    run: Option<Run>,
    queued: Option<(Tab, Profile)>,
    epoch: u64,
}

impl TabSequencer {
    pub fn view(&self) -> &TabView {
        &self.view
    }

    /// Phase entered by the most recently applied step of the running switch.
    pub fn phase(&self) -> Phase {
        self.run
            .and_then(|run| {
                let applied = run.next.checked_sub(1)?;
                run.profile.steps().get(applied)
            })
            .map_or(Phase::Idle, |step| step.phase)
    }

    /// Tab the navigation should highlight: the most recent request, even
    /// while the copy on screen still belongs to the previous one.
    pub fn highlighted(&self) -> Tab {
        self.queued
            .map(|(tab, _)| tab)
            .or(self.run.map(|run| run.target))
            .unwrap_or(self.view.selected)
    }

    /// Bumped whenever the pending delay is replaced.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn next_delay(&self) -> Option<u32> {
        self.run.map(|run| run.profile.steps()[run.next].wait_ms)
    }

    pub fn request(&mut self, target: Tab, profile: Profile) {
        if self.run.is_some() {
            debug!("Queueing switch to {} while {:?}", target, self.phase());
            self.queued = Some((target, profile));
            return;
        }
        self.start(target, profile);
    }

    fn start(&mut self, target: Tab, profile: Profile) {
        debug!("Switching to {} with {:?} timings", target, profile);
        self.run = Some(Run { target, profile, next: 0 });
        self.advance();
    }

    /// Applies the next step. Called once the delay from `next_delay` elapses.
    pub fn advance(&mut self) {
        let Some(mut run) = self.run else {
            return;
        };
        let steps = run.profile.steps();
        let step = &steps[run.next];
        debug!("Tab switch to {} entering {:?}", run.target, step.phase);
        for action in step.actions {
            self.view.apply(*action, run.target);
        }
        run.next += 1;
        self.epoch += 1;

        if run.next < steps.len() {
            self.run = Some(run);
            return;
        }

        self.run = None;
        if let Some((target, profile)) = self.queued.take() {
            if target != self.view.selected {
                self.start(target, profile);
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.view.menu_open = !self.view.menu_open;
    }
}

pub enum TabAction {
    Select(Tab, Profile),
    Advance,
    ToggleMenu,
}

impl Reducible for TabSequencer {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TabAction::Select(tab, profile) => next.request(tab, profile),
            TabAction::Advance => next.advance(),
            TabAction::ToggleMenu => next.toggle_menu(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the pending sequence to completion, recording the elapsed time
    /// and view after every step.
    fn drain(seq: &mut TabSequencer) -> Vec<(u32, TabView)> {
        let mut elapsed = 0;
        let mut trace = Vec::new();
        while let Some(delay) = seq.next_delay() {
            elapsed += delay;
            seq.advance();
            trace.push((elapsed, seq.view().clone()));
        }
        trace
    }

    #[test]
    fn profile_boundary_is_inclusive() {
        assert_eq!(Profile::for_width(320.0), Profile::Mobile);
        assert_eq!(Profile::for_width(768.0), Profile::Mobile);
        assert_eq!(Profile::for_width(768.5), Profile::Desktop);
        assert_eq!(Profile::for_width(1440.0), Profile::Desktop);
    }

    #[test]
    fn starts_idle_on_sonia_with_everything_visible() {
        let seq = TabSequencer::default();
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(seq.next_delay(), None);
        assert_eq!(seq.view().selected, Tab::Sonia);
        assert!(seq.view().content_visible);
        assert!(seq.view().button_visible);
        assert!(!seq.view().menu_open);
    }

    #[test]
    fn request_hides_content_immediately() {
        for profile in [Profile::Mobile, Profile::Desktop] {
            let mut seq = TabSequencer::default();
            seq.request(Tab::Why, profile);
            assert!(!seq.view().content_visible);
            assert_eq!(seq.view().selected, Tab::Sonia);
            assert_eq!(seq.highlighted(), Tab::Why);
        }
    }

    #[test]
    fn desktop_sequence_timings() {
        let mut seq = TabSequencer::default();
        seq.request(Tab::Research, Profile::Desktop);
        assert!(!seq.view().button_visible);
        assert_eq!(seq.phase(), Phase::FadingOut);

        let trace = drain(&mut seq);
        let times: Vec<u32> = trace.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![500, 700]);
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(seq.view().selected, Tab::Research);
        assert!(seq.view().content_visible && seq.view().button_visible);
    }

    #[test]
    fn mobile_sequence_closes_menu_before_commit() {
        let mut seq = TabSequencer::default();
        seq.toggle_menu();
        seq.request(Tab::Partnerships, Profile::Mobile);
        assert!(seq.view().menu_open);
        assert_eq!(seq.phase(), Phase::FadingOut);

        let trace = drain(&mut seq);
        let times: Vec<u32> = trace.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![50, 350, 650]);

        let (_, after_close) = &trace[0];
        assert!(!after_close.menu_open);
        assert_eq!(after_close.selected, Tab::Sonia);

        let (_, after_commit) = &trace[1];
        assert_eq!(after_commit.selected, Tab::Partnerships);
        assert!(!after_commit.content_visible);

        assert!(seq.view().content_visible);
        // the mobile profile never touches the download button
        assert!(seq.view().button_visible);
    }

    #[test]
    fn copy_only_changes_while_hidden() {
        for profile in [Profile::Mobile, Profile::Desktop] {
            let mut seq = TabSequencer::default();
            seq.request(Tab::Why, profile);
            let trace = drain(&mut seq);
            let (last, body) = trace.split_last().expect("sequence has steps");

            for (_, view) in body {
                assert!(!view.content_visible, "{:?}: content shown early", profile);
                if profile == Profile::Desktop {
                    assert!(!view.button_visible);
                }
            }
            assert!(last.1.content_visible);

            let commit_at = trace
                .iter()
                .position(|(_, v)| v.selected == Tab::Why)
                .expect("tab committed");
            assert!(trace[..commit_at].iter().all(|(_, v)| v.selected == Tab::Sonia));
            assert!(trace[commit_at..].iter().all(|(_, v)| v.selected == Tab::Why));
        }
    }

    fn phase_trace(profile: Profile) -> Vec<Phase> {
        let mut seq = TabSequencer::default();
        seq.request(Tab::Hiring, profile);
        let mut phases = vec![seq.phase()];
        while seq.next_delay().is_some() {
            seq.advance();
            phases.push(seq.phase());
        }
        phases
    }

    #[test]
    fn mobile_phases_match_the_step_just_applied() {
        // hidden, menu closed (still fading out), committed, then back to idle
        assert_eq!(
            phase_trace(Profile::Mobile),
            vec![Phase::FadingOut, Phase::FadingOut, Phase::Committing, Phase::Idle]
        );
    }

    #[test]
    fn desktop_reports_fading_out_for_the_whole_fade() {
        let mut seq = TabSequencer::default();
        seq.request(Tab::Hiring, Profile::Desktop);
        assert_eq!(seq.next_delay(), Some(500));
        assert_eq!(seq.view().selected, Tab::Sonia);
        assert_eq!(seq.phase(), Phase::FadingOut);

        assert_eq!(
            phase_trace(Profile::Desktop),
            vec![Phase::FadingOut, Phase::Committing, Phase::Idle]
        );
    }

    #[test]
    fn committing_only_once_the_new_copy_is_in_place() {
        for profile in [Profile::Mobile, Profile::Desktop] {
            let mut seq = TabSequencer::default();
            seq.request(Tab::Research, profile);
            while seq.next_delay().is_some() {
                let committed = seq.view().selected == Tab::Research;
                assert_eq!(seq.phase() == Phase::Committing, committed, "{:?}", profile);
                seq.advance();
            }
        }
    }

    #[test]
    fn desktop_hiring_end_to_end() {
        let mut seq = TabSequencer::default();
        assert!(seq.view().selected.shows_download());

        seq.request(Tab::Hiring, Profile::Desktop);
        assert!(!seq.view().content_visible && !seq.view().button_visible);
        assert_eq!(seq.next_delay(), Some(500));

        seq.advance();
        assert_eq!(seq.view().selected, Tab::Hiring);
        assert!(seq.view().selected.shows_yc_badge());
        assert!(!seq.view().selected.shows_download());
        assert!(!seq.view().content_visible);
        assert_eq!(seq.next_delay(), Some(200));

        seq.advance();
        assert!(seq.view().content_visible && seq.view().button_visible);
        assert_eq!(seq.view().selected.copy(), Tab::Hiring.copy());
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn requests_mid_sequence_replay_latest() {
        let mut seq = TabSequencer::default();
        seq.request(Tab::Why, Profile::Desktop);
        let epoch = seq.epoch();

        seq.request(Tab::Research, Profile::Desktop);
        seq.request(Tab::Hiring, Profile::Desktop);
        assert_eq!(seq.epoch(), epoch, "queued requests must not reset the timer");
        assert_eq!(seq.highlighted(), Tab::Hiring);

        seq.advance();
        assert_eq!(seq.view().selected, Tab::Why);
        seq.advance();
        // the first run finished and the queued one started straight away
        assert_eq!(seq.view().selected, Tab::Why);
        assert!(!seq.view().content_visible);
        assert_eq!(seq.phase(), Phase::FadingOut);

        drain(&mut seq);
        assert_eq!(seq.view().selected, Tab::Hiring);
        assert!(seq.view().content_visible);
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn queued_request_for_committed_tab_is_dropped() {
        let mut seq = TabSequencer::default();
        seq.request(Tab::Why, Profile::Desktop);
        seq.request(Tab::Why, Profile::Desktop);
        drain(&mut seq);
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(seq.view().selected, Tab::Why);
        assert!(seq.view().content_visible);
    }

    #[test]
    fn advance_when_idle_is_a_no_op() {
        let mut seq = TabSequencer::default();
        seq.advance();
        assert_eq!(seq, TabSequencer::default());
    }

    #[test]
    fn highlight_follows_latest_request_before_commit() {
        let mut seq = TabSequencer::default();
        assert_eq!(seq.highlighted(), Tab::Sonia);

        seq.request(Tab::Why, Profile::Desktop);
        assert_eq!(seq.highlighted(), Tab::Why);
        assert_eq!(seq.view().selected, Tab::Sonia);

        seq.request(Tab::Partnerships, Profile::Desktop);
        seq.advance();
        // Why is on screen now, but the nav already points at the queued tab
        assert_eq!(seq.view().selected, Tab::Why);
        assert_eq!(seq.highlighted(), Tab::Partnerships);

        drain(&mut seq);
        assert_eq!(seq.highlighted(), Tab::Partnerships);
        assert_eq!(seq.view().selected, Tab::Partnerships);
    }

    #[test]
    fn reducer_drives_the_same_machine() {
        let state = Rc::new(TabSequencer::default());
        let state = state.reduce(TabAction::ToggleMenu);
        assert!(state.view().menu_open);
        let state = state.reduce(TabAction::Select(Tab::Research, Profile::Mobile));
        let state = state.reduce(TabAction::Advance);
        assert!(!state.view().menu_open);
        let state = state.reduce(TabAction::Advance).reduce(TabAction::Advance);
        assert_eq!(state.view().selected, Tab::Research);
        assert!(state.view().content_visible);
    }
}
