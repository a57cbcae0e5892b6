use crate::config::Config;
use crate::content::Portfolio;
use crate::motion::{MotionError, Reveal, Scheduler, ScopeTree, TimerFacility};
use crate::ui::form::{
    DispatchOutcome, FieldError, FormController, FormEvent, FormFields, ResetForm, SubmitRequest,
};
use crate::ui::pages::{ContactScopes, WebDevScopes};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Page {
    #[value(name = "web")]
    WebDev,
    Contact,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::WebDev, Page::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Page::WebDev => "Web Development",
            Page::Contact => "Contact",
        }
    }

    pub fn next(self) -> Page {
        match self {
            Page::WebDev => Page::Contact,
            Page::Contact => Page::WebDev,
        }
    }

    pub fn prev(self) -> Page {
        // Two pages: previous and next coincide.
        self.next()
    }
}

/// Payload of every timer the app schedules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerEvent {
    Reveal(Reveal),
    ResetForm(ResetForm),
}

impl From<Reveal> for TimerEvent {
    fn from(reveal: Reveal) -> Self {
        TimerEvent::Reveal(reveal)
    }
}

impl From<ResetForm> for TimerEvent {
    fn from(reset: ResetForm) -> Self {
        TimerEvent::ResetForm(reset)
    }
}

#[derive(Debug)]
pub enum UiCommand {
    Submit(SubmitRequest),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    page: Page,
    size: Option<(u16, u16)>,
    timers: Scheduler<TimerEvent>,
    scopes: ScopeTree,
    web_dev: WebDevScopes,
    contact: ContactScopes,
    /// Submission state and fields (MVI pattern).
    form: FormController,
    field_error: Option<FieldError>,
    content: Portfolio,
    submit_sender: Option<UiCommandSender>,
}

impl App {
    /// Build every page's scopes and play the entrance of `page`.
    pub fn new(config: &Config, page: Page) -> Result<Self, MotionError> {
        let variants = config.motion.variants.build()?;
        let content = config.content.clone();
        let fields = FormFields::contact();

        let mut scopes = ScopeTree::new();
        let web_dev = WebDevScopes::build(&mut scopes, &variants, &content.web_dev)?;
        let contact = ContactScopes::build(&mut scopes, &variants, fields.specs())?;

        let mut app = Self {
            should_quit: false,
            page,
            size: None,
            timers: Scheduler::new(),
            scopes,
            web_dev,
            contact,
            form: FormController::new(fields, &config.form),
            field_error: None,
            content,
            submit_sender: None,
        };
        app.show_page(page);
        Ok(app)
    }

    pub fn attach_submitter(&mut self, sender: UiCommandSender) {
        self.submit_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch page. A page plays its entrance the first time it is shown.
    pub fn show_page(&mut self, page: Page) {
        self.page = page;
        let root = match page {
            Page::WebDev => self.web_dev.root,
            Page::Contact => self.contact.root,
        };
        if self.scopes.enter::<TimerEvent, _>(root, &mut self.timers) {
            tracing::debug!(page = page.title(), "Page entrance started");
        }
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    pub fn web_dev_scopes(&self) -> &WebDevScopes {
        &self.web_dev
    }

    pub fn contact_scopes(&self) -> &ContactScopes {
        &self.contact
    }

    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn field_error(&self) -> Option<&FieldError> {
        self.field_error.as_ref()
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Current time on the app clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// True while the screen changes on its own: a reveal is pending, a
    /// transition is still running, or the sending spinner is turning.
    pub fn is_animating(&self) -> bool {
        !self.scopes.is_settled(self.now()) || self.form.state().is_busy()
    }

    /// How long the loop may sleep before the next frame is needed: one
    /// `tick` while animating, otherwise until the next timer, capped at
    /// `idle`.
    pub fn idle_wait(&self, tick: Duration, idle: Duration) -> Duration {
        if self.is_animating() {
            return tick;
        }
        match self.timers.next_due() {
            Some(due) => due.saturating_sub(self.now()).min(idle),
            None => idle,
        }
    }

    /// Fire every timer due at or before `now`, then move the clock to `now`.
    /// Returns `true` if any timer fired.
    pub fn advance(&mut self, now: Duration) -> bool {
        let mut fired_any = false;
        while let Some(fired) = self.timers.pop_due(now) {
            fired_any = true;
            match fired.payload {
                TimerEvent::Reveal(reveal) => {
                    self.scopes
                        .on_reveal::<TimerEvent, _>(fired.handle, reveal, &mut self.timers);
                }
                TimerEvent::ResetForm(reset) => {
                    self.dispatch_form(FormEvent::ResetElapsed {
                        handle: fired.handle,
                        reset,
                    });
                }
            }
        }
        self.timers.settle(now);
        fired_any
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Request a send of the contact form.
    pub fn submit(&mut self) -> DispatchOutcome {
        self.dispatch_form(FormEvent::Submit)
    }

    pub fn on_submit_finished(&mut self, ticket: u64, outcome: Result<(), String>) {
        self.dispatch_form(FormEvent::Completed { ticket, outcome });
    }

    /// Apply `edit` to the form fields unless a submission is in flight.
    pub fn edit_fields(&mut self, edit: impl FnOnce(&mut FormFields)) -> bool {
        match self.form.fields_mut() {
            Some(fields) => {
                edit(fields);
                self.field_error = None;
                true
            }
            None => false,
        }
    }

    /// Cancel every outstanding timer.
    pub fn teardown(&mut self) {
        self.form.teardown::<TimerEvent, _>(&mut self.timers);
        self.scopes.teardown::<TimerEvent, _>(&mut self.timers);
    }

    fn dispatch_form(&mut self, event: FormEvent) -> DispatchOutcome {
        let outcome = self.form.dispatch::<TimerEvent, _>(event, &mut self.timers);
        match &outcome {
            DispatchOutcome::Started(request) => {
                self.field_error = None;
                if let Err(reason) = self.send_submit(request.clone()) {
                    tracing::error!(ticket = request.ticket, error = %reason, "Submit worker unavailable");
                    self.form.dispatch::<TimerEvent, _>(
                        FormEvent::Completed {
                            ticket: request.ticket,
                            outcome: Err(reason),
                        },
                        &mut self.timers,
                    );
                }
            }
            DispatchOutcome::Blocked(err) => self.field_error = Some(err.clone()),
            DispatchOutcome::Busy | DispatchOutcome::Applied | DispatchOutcome::Ignored => {}
        }
        self.sync_status_scope();
        outcome
    }

    fn send_submit(&self, request: SubmitRequest) -> Result<(), String> {
        let Some(sender) = &self.submit_sender else {
            return Err("no submit worker attached".to_string());
        };
        sender
            .try_send(UiCommand::Submit(request))
            .map_err(|err| err.to_string())
    }

    /// The status message is mounted exactly while there is feedback to show.
    fn sync_status_scope(&mut self) {
        let status = self.contact.form.status;
        if self.form.state().shows_feedback() {
            self.scopes.mount::<TimerEvent, _>(status, &mut self.timers);
        } else {
            self.scopes.unmount::<TimerEvent, _>(status, &mut self.timers);
        }
    }
}
