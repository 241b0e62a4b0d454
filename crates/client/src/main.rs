//! logbook-client CLI entry point.

use clap::Parser;
use logbook_client::cli::{Cli, Commands, OutputFormat};
use logbook_client::client::LogbookClient;
use logbook_client::ClientError;
use logbook_client::output::{format_output, pretty};
use logbook_core::journal::{CreateTodoRequest, UpdateTodoRequest};

/// Exit codes: 1 local or transport failure, 2 rejected by the server, 3 not found.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        let code = match e.downcast_ref::<ClientError>().and_then(ClientError::status) {
            Some(404) => 3,
            Some(_) => 2,
            None => 1,
        };
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = LogbookClient::new(&cli.base_url);

    match cli.command {
        Commands::Journals(journals_cmd) => {
            use logbook_client::cli::journals::JournalsAction;
            match journals_cmd.action {
                JournalsAction::List => {
                    let journals = client.list_journals().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&journals, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_journals(&journals)),
                    }
                }
                JournalsAction::Create { text } => {
                    let journal = client.create_journal(&text).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&journal, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_journal(&journal))
                        }
                    }
                }
                JournalsAction::Get { id } => {
                    let journal = client.get_journal(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&journal, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_journal(&journal)),
                    }
                }
                JournalsAction::Update { id, text } => {
                    let journal = client.update_journal(id, &text).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&journal, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_journal(&journal))
                        }
                    }
                }
                JournalsAction::Delete { id } => {
                    client.delete_journal(id).await?;
                    if !cli.quiet {
                        println!("Deleted journal {}", id);
                    }
                }
                JournalsAction::Todos { id } => {
                    let todos = client.list_journal_todos(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
                    }
                }
            }
        }
        Commands::Todos(todos_cmd) => {
            use logbook_client::cli::todos::TodosAction;
            match todos_cmd.action {
                TodosAction::List => {
                    let todos = client.list_todos().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
                    }
                }
                TodosAction::Create {
                    text,
                    journal_id,
                    priority,
                } => {
                    let todo = client
                        .create_todo(CreateTodoRequest {
                            text: Some(text),
                            journal_id,
                            priority,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Get { id } => {
                    let todo = client.get_todo(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todo(&todo)),
                    }
                }
                TodosAction::Update {
                    id,
                    text,
                    done,
                    priority,
                } => {
                    let update = UpdateTodoRequest {
                        text,
                        done,
                        priority,
                    };
                    if update.is_empty() {
                        return Err("nothing to update: pass --text, --done or --priority".into());
                    }
                    let todo = client.update_todo(id, update).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Delete { id } => {
                    client.delete_todo(id).await?;
                    if !cli.quiet {
                        println!("Deleted todo {}", id);
                    }
                }
            }
        }
        Commands::Login(login_cmd) => {
            let response = client
                .login(&login_cmd.username, &login_cmd.password)
                .await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_login(&response)),
            }
        }
        Commands::Health(health_cmd) => {
            use logbook_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Storage => {
                    let health = client.health().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
                    }
                }
            }
        }
    }

    Ok(())
}
