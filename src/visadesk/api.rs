//! # API Facade
//!
//! The single entry point for every admin operation, regardless of the UI
//! driving it. The facade dispatches to the command modules and owns the
//! external collaborators (mailer, AI assistant, image host) so command
//! signatures stay free of wiring.
//!
//! `AdminApi<B: StorageBackend>` is generic over the storage backend:
//! production runs on `FsBackend`, tests on `MemBackend`. No business
//! logic lives here — that belongs in `commands/*.rs` — and nothing here
//! touches stdout or the process exit code.

use crate::commands;
use crate::commands::emails::EmailFilter;
use crate::commands::ledger::{EntryDraft, LedgerTotals, RunningPoint};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::external::{
    FaqAssistant, ImageHost, InlineImageHost, Mailer, NoopMailer, UnconfiguredAssistant,
};
use crate::lifecycle::StatusFilter;
use crate::model::{
    AboutContent, Client, EmailMessage, EntryKind, EntryStatus, HeroImage, LedgerEntry, LogEntry,
    OpeningBalance, Service, SiteSettings, Testimonial,
};
use crate::store::{AdminStore, StorageBackend};
use uuid::Uuid;

pub struct AdminApi<B: StorageBackend> {
    store: AdminStore<B>,
    mailer: Box<dyn Mailer>,
    assistant: Box<dyn FaqAssistant>,
    images: Box<dyn ImageHost>,
}

impl<B: StorageBackend> AdminApi<B> {
    /// Build an api over a backend with the unconfigured collaborator
    /// fallbacks. Use the `with_*` builders to wire real providers.
    pub fn new(backend: B) -> Self {
        Self {
            store: AdminStore::new(backend),
            mailer: Box::new(NoopMailer),
            assistant: Box::new(UnconfiguredAssistant),
            images: Box::new(InlineImageHost),
        }
    }

    pub fn with_mailer(mut self, mailer: Box<dyn Mailer>) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn with_assistant(mut self, assistant: Box<dyn FaqAssistant>) -> Self {
        self.assistant = assistant;
        self
    }

    pub fn with_image_host(mut self, images: Box<dyn ImageHost>) -> Self {
        self.images = images;
        self
    }

    pub fn store(&self) -> &AdminStore<B> {
        &self.store
    }

    // --- Services ---

    pub fn create_service(&self, draft: commands::services::ServiceDraft) -> Result<CmdResult> {
        commands::services::create(&self.store, self.images.as_ref(), draft)
    }

    pub fn update_service(
        &self,
        id: Uuid,
        update: commands::services::ServiceUpdate,
    ) -> Result<CmdResult> {
        commands::services::update(&self.store, self.images.as_ref(), id, update)
    }

    pub fn list_services(
        &self,
        filter: StatusFilter,
        search: Option<&str>,
    ) -> Result<Vec<Service>> {
        commands::services::list(&self.store, filter, search)
    }

    pub fn trash_service(&self, id: Uuid) -> Result<CmdResult> {
        commands::services::trash(&self.store, id)
    }

    pub fn restore_service(&self, id: Uuid) -> Result<CmdResult> {
        commands::services::restore(&self.store, id)
    }

    pub fn purge_service(&self, id: Uuid) -> Result<CmdResult> {
        commands::services::purge(&self.store, id)
    }

    pub fn restore_all_services(&self) -> Result<CmdResult> {
        commands::services::restore_all(&self.store)
    }

    // --- Testimonials ---

    pub fn add_testimonial(
        &self,
        draft: commands::testimonials::TestimonialDraft,
    ) -> Result<CmdResult> {
        commands::testimonials::create(&self.store, self.images.as_ref(), draft)
    }

    pub fn update_testimonial(
        &self,
        id: Uuid,
        update: commands::testimonials::TestimonialUpdate,
    ) -> Result<CmdResult> {
        commands::testimonials::update(&self.store, self.images.as_ref(), id, update)
    }

    pub fn delete_testimonial(&self, id: Uuid) -> Result<CmdResult> {
        commands::testimonials::delete(&self.store, id)
    }

    pub fn list_testimonials(&self, search: Option<&str>) -> Result<Vec<Testimonial>> {
        commands::testimonials::list(&self.store, search)
    }

    // --- Hero images ---

    pub fn add_hero_image(
        &self,
        title: String,
        description: String,
        image: String,
    ) -> Result<CmdResult> {
        commands::hero::create(&self.store, self.images.as_ref(), title, description, image)
    }

    pub fn update_hero_image(
        &self,
        id: Uuid,
        update: commands::hero::HeroUpdate,
    ) -> Result<CmdResult> {
        commands::hero::update(&self.store, self.images.as_ref(), id, update)
    }

    pub fn list_hero_images(&self, filter: StatusFilter) -> Result<Vec<HeroImage>> {
        commands::hero::list(&self.store, filter)
    }

    pub fn trash_hero_image(&self, id: Uuid) -> Result<CmdResult> {
        commands::hero::trash(&self.store, id)
    }

    pub fn restore_hero_image(&self, id: Uuid) -> Result<CmdResult> {
        commands::hero::restore(&self.store, id)
    }

    pub fn purge_hero_image(&self, id: Uuid) -> Result<CmdResult> {
        commands::hero::purge(&self.store, id)
    }

    pub fn restore_all_hero_images(&self) -> Result<CmdResult> {
        commands::hero::restore_all(&self.store)
    }

    // --- About ---

    pub fn about_content(&self) -> Result<AboutContent> {
        commands::about::get(&self.store)
    }

    pub fn update_about(&self, update: commands::about::AboutUpdate) -> Result<CmdResult> {
        commands::about::set(&self.store, self.images.as_ref(), update)
    }

    // --- Clients ---

    pub fn add_client(&self, name: String) -> Result<CmdResult> {
        commands::clients::create(&self.store, name)
    }

    pub fn rename_client(&self, id: Uuid, name: String) -> Result<CmdResult> {
        commands::clients::rename(&self.store, id, name)
    }

    pub fn list_clients(&self, filter: StatusFilter, search: Option<&str>) -> Result<Vec<Client>> {
        commands::clients::list(&self.store, filter, search)
    }

    pub fn trash_client(&self, id: Uuid) -> Result<CmdResult> {
        commands::clients::trash(&self.store, id)
    }

    pub fn restore_client(&self, id: Uuid) -> Result<CmdResult> {
        commands::clients::restore(&self.store, id)
    }

    pub fn purge_client(&self, id: Uuid) -> Result<CmdResult> {
        commands::clients::purge(&self.store, id)
    }

    pub fn restore_all_clients(&self) -> Result<CmdResult> {
        commands::clients::restore_all(&self.store)
    }

    // --- Ledger ---

    pub fn add_ledger_entry(&self, draft: EntryDraft) -> Result<CmdResult> {
        commands::ledger::add_entry(&self.store, draft)
    }

    pub fn list_ledger(
        &self,
        client: Option<Uuid>,
        status: Option<EntryStatus>,
    ) -> Result<Vec<LedgerEntry>> {
        commands::ledger::list(&self.store, client, status)
    }

    pub fn ledger_totals(&self, client: Option<Uuid>) -> Result<LedgerTotals> {
        commands::ledger::active_totals(&self.store, client)
    }

    pub fn ledger_series(&self, client: Option<Uuid>) -> Result<Vec<RunningPoint>> {
        commands::ledger::active_series(&self.store, client)
    }

    pub fn set_ledger_entry_status(&self, id: Uuid, status: EntryStatus) -> Result<CmdResult> {
        commands::ledger::set_entry_status(&self.store, id, status)
    }

    pub fn close_out_ledger(&self) -> Result<CmdResult> {
        commands::ledger::close_out(&self.store)
    }

    pub fn flush_ledger(&self) -> Result<CmdResult> {
        commands::ledger::flush(&self.store)
    }

    // --- Opening balances ---

    pub fn set_opening_balance(
        &self,
        client_id: Uuid,
        kind: EntryKind,
        amount: i64,
    ) -> Result<CmdResult> {
        commands::balances::set(&self.store, client_id, kind, amount)
    }

    pub fn list_opening_balances(&self) -> Result<Vec<OpeningBalance>> {
        commands::balances::list(&self.store)
    }

    // --- Emails ---

    pub fn list_emails(&self, filter: &EmailFilter) -> Result<Vec<EmailMessage>> {
        commands::emails::list(&self.store, filter)
    }

    pub fn get_email(&self, id: Uuid) -> Result<EmailMessage> {
        commands::emails::get(&self.store, id)
    }

    pub fn mark_email_read(&self, id: Uuid) -> Result<CmdResult> {
        commands::emails::mark_read(&self.store, id)
    }

    pub fn toggle_email_favorite(&self, id: Uuid) -> Result<CmdResult> {
        commands::emails::toggle_favorite(&self.store, id)
    }

    pub fn trash_email(&self, id: Uuid) -> Result<CmdResult> {
        commands::emails::trash(&self.store, id)
    }

    pub fn restore_email(&self, id: Uuid) -> Result<CmdResult> {
        commands::emails::restore(&self.store, id)
    }

    pub fn purge_email(&self, id: Uuid) -> Result<CmdResult> {
        commands::emails::purge(&self.store, id)
    }

    pub fn restore_all_emails(&self) -> Result<CmdResult> {
        commands::emails::restore_all(&self.store)
    }

    // --- Contact form & FAQ ---

    pub fn submit_contact(&self, form: commands::contact::ContactForm) -> Result<CmdResult> {
        commands::contact::submit(&self.store, self.mailer.as_ref(), form)
    }

    pub fn ask_faq(&self, question: &str) -> Result<String> {
        commands::faq::ask(self.assistant.as_ref(), question)
    }

    // --- Settings & auth ---

    pub fn site_settings(&self) -> Result<SiteSettings> {
        commands::settings::get(&self.store)
    }

    pub fn update_settings(
        &self,
        update: commands::settings::SettingsUpdate,
    ) -> Result<CmdResult> {
        commands::settings::update(&self.store, self.images.as_ref(), update)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        commands::settings::authenticate(&self.store, username, password)
    }

    // --- Logs, backup, init ---

    pub fn activity_log(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        commands::logs::list(&self.store, limit)
    }

    pub fn export_backup(&self) -> Result<String> {
        commands::backup::export_all(&self.store)
    }

    pub fn import_backup(&self, text: &str) -> Result<CmdResult> {
        commands::backup::import_all(&self.store, text)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.store)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
