//! CLI commands for the family profile and its members

use clap::Subcommand;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{AccessLevel, FamilyMember};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the profile and its members
    Show,

    /// Change profile fields; omitted fields keep their value
    Set {
        /// Account holder name
        #[arg(short, long)]
        name: Option<String>,
        /// Empty string clears it
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        family_name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// Add a family member
    Add {
        name: String,
        #[arg(short, long, default_value = "")]
        email: String,
        /// admin, member or viewer
        #[arg(short, long, default_value = "member")]
        access: String,
    },

    /// List family members
    #[command(alias = "ls")]
    List,

    /// Change a member's name, email or access level
    Update {
        /// Member name or ID
        member: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        access: Option<String>,
    },

    /// Remove a family member
    #[command(alias = "rm")]
    Remove {
        /// Member name or ID
        member: String,
    },
}

pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> FinanceResult<()> {
    match cmd {
        ProfileCommands::Show => {
            let profile = storage.profile()?;
            if profile.is_empty() {
                println!("No profile set. Use 'famfin profile set --family-name <NAME>'.");
                return Ok(());
            }

            println!("Family: {}", or_dash(&profile.family_name));
            println!("Name:   {}", or_dash(&profile.name));
            println!("Email:  {}", or_dash(&profile.email));
            println!();
            print_members(&profile.members);
        }
        ProfileCommands::Set {
            name,
            email,
            family_name,
        } => {
            let profile = storage.update_profile(|profile| {
                if let Some(name) = name {
                    profile.name = name.trim().to_string();
                }
                if let Some(email) = email {
                    profile.email = email.trim().to_string();
                }
                if let Some(family_name) = family_name {
                    profile.family_name = family_name.trim().to_string();
                }
            })?;
            storage.save()?;
            println!(
                "Profile updated: {} ({})",
                or_dash(&profile.family_name),
                or_dash(&profile.name)
            );
        }
    }

    Ok(())
}

pub fn handle_member_command(storage: &Storage, cmd: MemberCommands) -> FinanceResult<()> {
    match cmd {
        MemberCommands::Add {
            name,
            email,
            access,
        } => {
            let member = FamilyMember::new(name, parse_access(&access)?).with_email(email);
            let line = format!("{} ({})", member.name, member.access_level);
            storage.add_member(member)?;
            storage.save()?;
            println!("Added member {}", line);
        }
        MemberCommands::List => {
            print_members(&storage.profile()?.members);
        }
        MemberCommands::Update {
            member,
            name,
            email,
            access,
        } => {
            let access = access.as_deref().map(parse_access).transpose()?;
            let updated = storage.update_member(&member, |m| {
                if let Some(name) = name {
                    m.name = name.trim().to_string();
                }
                if let Some(email) = email {
                    m.email = email.trim().to_string();
                }
                if let Some(access) = access {
                    m.access_level = access;
                }
            })?;
            storage.save()?;
            println!("Updated member {} ({})", updated.name, updated.access_level);
        }
        MemberCommands::Remove { member } => {
            let removed = storage.remove_member(&member)?;
            storage.save()?;
            println!("Removed member {}", removed.name);
        }
    }

    Ok(())
}

fn print_members(members: &[FamilyMember]) {
    if members.is_empty() {
        println!("No family members.");
        return;
    }

    println!("{:14} {:20} {:28} {}", "ID", "Name", "Email", "Access");
    println!("{}", "-".repeat(72));
    for member in members {
        println!(
            "{:14} {:20} {:28} {}",
            member.id.short(),
            member.name,
            or_dash(&member.email),
            member.access_level
        );
    }
}

fn parse_access(s: &str) -> FinanceResult<AccessLevel> {
    AccessLevel::parse(s).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid access level '{}': use admin, member or viewer",
            s
        ))
    })
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
