use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use visadesk::api::AdminApi;
use visadesk::commands::about::AboutUpdate;
use visadesk::commands::contact::ContactForm;
use visadesk::commands::emails::EmailFilter;
use visadesk::commands::hero::HeroUpdate;
use visadesk::commands::ledger::{parse_amount, EntryDraft};
use visadesk::commands::services::{ServiceDraft, ServiceUpdate};
use visadesk::commands::settings::SettingsUpdate;
use visadesk::commands::testimonials::{TestimonialDraft, TestimonialUpdate};
use visadesk::error::{Result, VisadeskError};
use visadesk::lifecycle::StatusFilter;
use visadesk::model::EntryStatus;
use visadesk::store::fs_backend::FsBackend;

mod args;
mod print;

use args::{
    AboutCmd, BackupCmd, BalanceCmd, Cli, ClientCmd, Commands, EmailCmd, HeroCmd, LedgerCmd,
    ServiceCmd, SettingsCmd, TestimonialCmd,
};
use print::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli)?;
    let api = AdminApi::new(FsBackend::new(data_dir));

    match cli.command {
        Commands::Services { command } => handle_services(&api, command),
        Commands::Testimonials { command } => handle_testimonials(&api, command),
        Commands::Hero { command } => handle_hero(&api, command),
        Commands::About { command } => handle_about(&api, command),
        Commands::Clients { command } => handle_clients(&api, command),
        Commands::Ledger { command } => handle_ledger(&api, command),
        Commands::Balances { command } => handle_balances(&api, command),
        Commands::Emails { command } => handle_emails(&api, command),
        Commands::Settings { command } => handle_settings(&api, command),
        Commands::Logs { limit } => {
            let entries = api.activity_log(limit)?;
            print_logs(&entries);
            Ok(())
        }
        Commands::Backup { command } => handle_backup(&api, command),
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let result = api.submit_contact(ContactForm {
                name,
                email,
                subject,
                message,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Faq { question } => {
            let answer = api.ask_faq(&question.join(" "))?;
            println!("{}", answer);
            Ok(())
        }
        Commands::Init => {
            let result = api.init()?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("VISADESK_DATA") {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("com", "theluu", "visadesk").ok_or_else(|| {
        VisadeskError::Store("Could not determine a data directory".to_string())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

fn status_filter(trash: bool, all: bool) -> StatusFilter {
    if all {
        StatusFilter::All
    } else if trash {
        StatusFilter::Trash
    } else {
        StatusFilter::Active
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().map_err(VisadeskError::Io)?;
    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(VisadeskError::Io)?;
    Ok(matches!(input.trim(), "y" | "Y"))
}

fn cancelled() -> Result<()> {
    println!("Operation cancelled.");
    Ok(())
}

fn handle_services<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: ServiceCmd,
) -> Result<()> {
    match command {
        ServiceCmd::List { trash, all, search } => {
            let services =
                api.list_services(status_filter(trash, all), search.as_deref())?;
            print_services(&services);
        }
        ServiceCmd::Add {
            title,
            description,
            long_description,
            requirements,
            image,
            icon,
        } => {
            let result = api.create_service(ServiceDraft {
                title,
                description,
                long_description,
                requirements,
                image,
                icon,
            })?;
            print_messages(&result.messages);
        }
        ServiceCmd::Update {
            id,
            title,
            description,
            long_description,
            requirements,
            image,
            icon,
        } => {
            let result = api.update_service(
                id,
                ServiceUpdate {
                    title,
                    description,
                    long_description,
                    requirements: if requirements.is_empty() {
                        None
                    } else {
                        Some(requirements)
                    },
                    image,
                    icon,
                },
            )?;
            print_messages(&result.messages);
        }
        ServiceCmd::Trash { id } => print_messages(&api.trash_service(id)?.messages),
        ServiceCmd::Restore { id } => print_messages(&api.restore_service(id)?.messages),
        ServiceCmd::RestoreAll => print_messages(&api.restore_all_services()?.messages),
        ServiceCmd::Purge { id, yes } => {
            if !yes && !confirm("Permanently delete this service?")? {
                return cancelled();
            }
            print_messages(&api.purge_service(id)?.messages);
        }
    }
    Ok(())
}

fn handle_testimonials<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: TestimonialCmd,
) -> Result<()> {
    match command {
        TestimonialCmd::List { search } => {
            let testimonials = api.list_testimonials(search.as_deref())?;
            print_testimonials(&testimonials);
        }
        TestimonialCmd::Add {
            name,
            destination,
            quote,
            image,
            role,
            country,
        } => {
            let result = api.add_testimonial(TestimonialDraft {
                name,
                destination,
                quote,
                image,
                role,
                country,
            })?;
            print_messages(&result.messages);
        }
        TestimonialCmd::Update {
            id,
            name,
            destination,
            quote,
            image,
            role,
            country,
        } => {
            let result = api.update_testimonial(
                id,
                TestimonialUpdate {
                    name,
                    destination,
                    quote,
                    image,
                    role,
                    country,
                },
            )?;
            print_messages(&result.messages);
        }
        TestimonialCmd::Delete { id, yes } => {
            if !yes && !confirm("Permanently delete this testimonial?")? {
                return cancelled();
            }
            print_messages(&api.delete_testimonial(id)?.messages);
        }
    }
    Ok(())
}

fn handle_hero<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: HeroCmd,
) -> Result<()> {
    match command {
        HeroCmd::List { trash, all } => {
            let images = api.list_hero_images(status_filter(trash, all))?;
            print_hero_images(&images);
        }
        HeroCmd::Add {
            title,
            description,
            image,
        } => print_messages(&api.add_hero_image(title, description, image)?.messages),
        HeroCmd::Update {
            id,
            title,
            description,
            image,
        } => {
            let result = api.update_hero_image(
                id,
                HeroUpdate {
                    title,
                    description,
                    image,
                },
            )?;
            print_messages(&result.messages);
        }
        HeroCmd::Trash { id } => print_messages(&api.trash_hero_image(id)?.messages),
        HeroCmd::Restore { id } => print_messages(&api.restore_hero_image(id)?.messages),
        HeroCmd::RestoreAll => print_messages(&api.restore_all_hero_images()?.messages),
        HeroCmd::Purge { id, yes } => {
            if !yes && !confirm("Permanently delete this hero image?")? {
                return cancelled();
            }
            print_messages(&api.purge_hero_image(id)?.messages);
        }
    }
    Ok(())
}

fn handle_about<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: AboutCmd,
) -> Result<()> {
    match command {
        AboutCmd::Show => print_about(&api.about_content()?),
        AboutCmd::Set {
            title,
            paragraph1,
            paragraph2,
            image,
        } => {
            let result = api.update_about(AboutUpdate {
                title,
                paragraph1,
                paragraph2,
                image,
            })?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_clients<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: ClientCmd,
) -> Result<()> {
    match command {
        ClientCmd::List { trash, all, search } => {
            let clients = api.list_clients(status_filter(trash, all), search.as_deref())?;
            print_clients(&clients);
        }
        ClientCmd::Add { name } => print_messages(&api.add_client(name)?.messages),
        ClientCmd::Rename { id, name } => print_messages(&api.rename_client(id, name)?.messages),
        ClientCmd::Trash { id } => print_messages(&api.trash_client(id)?.messages),
        ClientCmd::Restore { id } => print_messages(&api.restore_client(id)?.messages),
        ClientCmd::RestoreAll => print_messages(&api.restore_all_clients()?.messages),
        ClientCmd::Purge { id, yes } => {
            if !yes && !confirm("Permanently delete this client?")? {
                return cancelled();
            }
            print_messages(&api.purge_client(id)?.messages);
        }
    }
    Ok(())
}

fn handle_ledger<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: LedgerCmd,
) -> Result<()> {
    match command {
        LedgerCmd::List {
            client,
            inactive,
            all,
        } => {
            let status = if all {
                None
            } else if inactive {
                Some(EntryStatus::Inactive)
            } else {
                Some(EntryStatus::Active)
            };
            let entries = api.list_ledger(client, status)?;
            print_ledger(&entries);
        }
        LedgerCmd::Add {
            client,
            date,
            description,
            kind,
            amount,
        } => {
            let amount = parse_amount(&amount)?;
            let result = api.add_ledger_entry(EntryDraft {
                client_id: client,
                date,
                description,
                kind,
                amount,
            })?;
            print_messages(&result.messages);
        }
        LedgerCmd::Totals { client } => print_totals(&api.ledger_totals(client)?),
        LedgerCmd::Series { client } => print_series(&api.ledger_series(client)?),
        LedgerCmd::Deactivate { id } => {
            print_messages(&api.set_ledger_entry_status(id, EntryStatus::Inactive)?.messages)
        }
        LedgerCmd::Activate { id } => {
            print_messages(&api.set_ledger_entry_status(id, EntryStatus::Active)?.messages)
        }
        LedgerCmd::CloseOut => print_messages(&api.close_out_ledger()?.messages),
        LedgerCmd::Flush { yes } => {
            if !yes && !confirm("Permanently delete EVERY ledger entry?")? {
                return cancelled();
            }
            print_messages(&api.flush_ledger()?.messages);
        }
    }
    Ok(())
}

fn handle_balances<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: BalanceCmd,
) -> Result<()> {
    match command {
        BalanceCmd::List => print_balances(&api.list_opening_balances()?),
        BalanceCmd::Set {
            client,
            kind,
            amount,
        } => {
            let amount = parse_amount(&amount)?;
            print_messages(&api.set_opening_balance(client, kind, amount)?.messages);
        }
    }
    Ok(())
}

fn handle_emails<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: EmailCmd,
) -> Result<()> {
    match command {
        EmailCmd::List {
            trash,
            all,
            unread,
            favorites,
            search,
        } => {
            let emails = api.list_emails(&EmailFilter {
                status: Some(status_filter(trash, all)),
                unread_only: unread,
                favorites_only: favorites,
                search,
            })?;
            print_emails(&emails);
        }
        EmailCmd::Show { id } => {
            let email = api.get_email(id)?;
            print_email(&email);
            if !email.read {
                api.mark_email_read(id)?;
            }
        }
        EmailCmd::Read { id } => print_messages(&api.mark_email_read(id)?.messages),
        EmailCmd::Favorite { id } => print_messages(&api.toggle_email_favorite(id)?.messages),
        EmailCmd::Trash { id } => print_messages(&api.trash_email(id)?.messages),
        EmailCmd::Restore { id } => print_messages(&api.restore_email(id)?.messages),
        EmailCmd::RestoreAll => print_messages(&api.restore_all_emails()?.messages),
        EmailCmd::Purge { id, yes } => {
            if !yes && !confirm("Permanently delete this message?")? {
                return cancelled();
            }
            print_messages(&api.purge_email(id)?.messages);
        }
    }
    Ok(())
}

fn handle_settings<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: SettingsCmd,
) -> Result<()> {
    match command {
        SettingsCmd::Show => print_settings(&api.site_settings()?),
        SettingsCmd::Set {
            logo,
            username,
            password,
            avatar,
        } => {
            let result = api.update_settings(SettingsUpdate {
                logo,
                username,
                password,
                avatar,
            })?;
            print_messages(&result.messages);
        }
        SettingsCmd::Login { username, password } => {
            if api.authenticate(&username, &password)? {
                println!("{}", "Login OK".green());
            } else {
                println!("{}", "Invalid credentials".red());
            }
        }
    }
    Ok(())
}

fn handle_backup<B: visadesk::store::StorageBackend>(
    api: &AdminApi<B>,
    command: BackupCmd,
) -> Result<()> {
    match command {
        BackupCmd::Export { output } => {
            let envelope = api.export_backup()?;
            match output {
                Some(path) => {
                    fs::write(&path, envelope).map_err(VisadeskError::Io)?;
                    println!("{}", format!("Backup written to {}", path.display()).green());
                }
                None => println!("{}", envelope),
            }
        }
        BackupCmd::Import { path } => {
            let text = fs::read_to_string(&path).map_err(VisadeskError::Io)?;
            let result = api.import_backup(&text)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}
