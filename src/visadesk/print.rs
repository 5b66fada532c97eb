use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use visadesk::api::{CmdMessage, MessageLevel};
use visadesk::commands::ledger::{format_amount, LedgerTotals, RunningPoint};
use visadesk::model::{
    AboutContent, Client, EmailMessage, EntryKind, EntryStatus, HeroImage, LedgerEntry, LogEntry,
    OpeningBalance, RecordStatus, Service, SiteSettings, Testimonial,
};

const LINE_WIDTH: usize = 100;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_services(services: &[Service]) {
    if services.is_empty() {
        println!("No services found.");
        return;
    }
    for service in services {
        let summary = truncate_to_width(&service.description, LINE_WIDTH.saturating_sub(50));
        println!(
            "{}  {} {} {}{}",
            service.id.to_string().dimmed(),
            status_marker(service.status),
            service.title.bold(),
            format!("[{}] ", service.icon).dimmed(),
            summary.dimmed()
        );
    }
}

pub(super) fn print_testimonials(testimonials: &[Testimonial]) {
    if testimonials.is_empty() {
        println!("No testimonials found.");
        return;
    }
    for t in testimonials {
        println!(
            "{}  {} — {} ({})",
            t.id.to_string().dimmed(),
            t.name.bold(),
            t.destination,
            t.country
        );
        let quote = truncate_to_width(&t.quote, LINE_WIDTH.saturating_sub(6));
        if !quote.is_empty() {
            println!("    {}", format!("\u{201c}{}\u{201d}", quote).dimmed());
        }
    }
}

pub(super) fn print_hero_images(images: &[HeroImage]) {
    if images.is_empty() {
        println!("No hero images found.");
        return;
    }
    for hero in images {
        println!(
            "{}  {} {} {}",
            hero.id.to_string().dimmed(),
            status_marker(hero.status),
            hero.title.bold(),
            truncate_to_width(&hero.description, 40).dimmed()
        );
    }
}

pub(super) fn print_about(about: &AboutContent) {
    println!("{}", about.title.bold());
    if !about.paragraph1.is_empty() {
        println!("\n{}", about.paragraph1);
    }
    if !about.paragraph2.is_empty() {
        println!("\n{}", about.paragraph2);
    }
    if !about.image.is_empty() {
        println!("\n{} {}", "image:".dimmed(), about.image);
    }
}

pub(super) fn print_clients(clients: &[Client]) {
    if clients.is_empty() {
        println!("No clients found.");
        return;
    }
    for client in clients {
        println!(
            "{}  {} {}  {}",
            client.id.to_string().dimmed(),
            status_marker(client.status),
            pad_to_width(&client.name, 28).bold(),
            format_time_ago(client.created_at).dimmed()
        );
    }
}

pub(super) fn print_ledger(entries: &[LedgerEntry]) {
    if entries.is_empty() {
        println!("No ledger entries found.");
        return;
    }
    for entry in entries {
        let kind = match entry.kind {
            EntryKind::Credit => format!("{:>6}", "credit").green(),
            EntryKind::Debit => format!("{:>6}", "debit").red(),
        };
        let closed = match entry.status {
            EntryStatus::Active => "".normal(),
            EntryStatus::Inactive => " (closed)".dimmed(),
        };
        println!(
            "{}  {}  {} {:>12}  {}{}  {}",
            entry.id.to_string().dimmed(),
            entry.date,
            kind,
            format_amount(entry.amount),
            pad_to_width(&entry.client_name, 20),
            closed,
            truncate_to_width(&entry.description, 30).dimmed()
        );
    }
}

pub(super) fn print_totals(totals: &LedgerTotals) {
    println!("{} {:>12}", "credit ".green(), format_amount(totals.credit));
    println!("{} {:>12}", "debit  ".red(), format_amount(totals.debit));
    println!("{} {:>12}", "balance".bold(), format_amount(totals.balance()));
}

pub(super) fn print_series(series: &[RunningPoint]) {
    if series.is_empty() {
        println!("No active ledger entries.");
        return;
    }
    println!(
        "{}",
        format!(
            "{:<12} {:>12} {:>12} {:>12}",
            "date", "credit", "debit", "balance"
        )
        .dimmed()
    );
    for point in series {
        println!(
            "{:<12} {:>12} {:>12} {:>12}",
            point.date.to_string(),
            format_amount(point.credit),
            format_amount(point.debit),
            format_amount(point.balance)
        );
    }
}

pub(super) fn print_balances(balances: &[OpeningBalance]) {
    if balances.is_empty() {
        println!("No opening balances set.");
        return;
    }
    for balance in balances {
        let kind = match balance.kind {
            EntryKind::Credit => "credit".green(),
            EntryKind::Debit => "debit".red(),
        };
        println!(
            "{}  {} {} {:>12}",
            balance.client_id.to_string().dimmed(),
            pad_to_width(&balance.client_name, 28).bold(),
            kind,
            format_amount(balance.amount)
        );
    }
}

pub(super) fn print_emails(emails: &[EmailMessage]) {
    if emails.is_empty() {
        println!("No messages found.");
        return;
    }
    for email in emails {
        let unread = if email.read { " " } else { "●" };
        let favorite = if email.favorited { "★" } else { " " };
        println!(
            "{}  {}{} {} {} {}  {}",
            email.id.to_string().dimmed(),
            unread.cyan(),
            favorite.yellow(),
            status_marker(email.status),
            pad_to_width(&email.name, 20).bold(),
            truncate_to_width(&email.subject, 40),
            format_time_ago(email.received_at).dimmed()
        );
    }
}

pub(super) fn print_email(email: &EmailMessage) {
    println!(
        "{} {} <{}>",
        "From:".dimmed(),
        email.name.bold(),
        email.email
    );
    println!("{} {}", "Date:".dimmed(), email.received_at);
    println!("{} {}", "Subject:".dimmed(), email.subject.bold());
    println!("--------------------------------");
    println!("{}", email.message);
}

pub(super) fn print_logs(entries: &[LogEntry]) {
    if entries.is_empty() {
        println!("No activity recorded.");
        return;
    }
    for entry in entries {
        println!(
            "{}  {}  {}",
            format_time_ago(entry.timestamp).dimmed(),
            pad_to_width(&entry.action, 32),
            entry.details.dimmed()
        );
    }
}

pub(super) fn print_settings(settings: &SiteSettings) {
    println!("{} {}", "username:".dimmed(), settings.username);
    println!("{} {}", "password:".dimmed(), "(hidden)".dimmed());
    println!(
        "{} {}",
        "logo:".dimmed(),
        if settings.logo.is_empty() {
            "(unset)"
        } else {
            settings.logo.as_str()
        }
    );
    println!(
        "{} {}",
        "avatar:".dimmed(),
        if settings.avatar.is_empty() {
            "(unset)"
        } else {
            settings.avatar.as_str()
        }
    );
}

fn status_marker(status: RecordStatus) -> colored::ColoredString {
    match status {
        RecordStatus::Active => " ".normal(),
        RecordStatus::Trash => "t".red(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat: String = s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    if flat.width() <= max_width {
        return flat;
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    format!(
        "{:>14}",
        formatter.convert(duration.to_std().unwrap_or_default())
    )
}
