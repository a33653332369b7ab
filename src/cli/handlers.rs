use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::{self, print_json};
use crate::io::session;
use crate::io::storage::{FileStorage, default_data_dir};
use crate::model::column::ColumnId;
use crate::model::project::{Project, ProjectFields, ProjectType};
use crate::model::task::{Priority, PriorityFilter, TaskFields};
use crate::store::{MoveGesture, Store};

/// Errors raised by the CLI layer itself. The store never raises; these
/// cover the collaborator's own faults (bad references, bad flag values,
/// no session) before an operation reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not signed in (try `fb login demo 123456`)")]
    NotSignedIn,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no active project (try `fb project add <name>`)")]
    NoActiveProject,
    #[error("no project matching '{0}'")]
    ProjectNotFound(String),
    #[error("no task matching '{0}'")]
    TaskNotFound(String),
    #[error("'{0}' matches more than one entry, be more specific")]
    Ambiguous(String),
    #[error("unknown column '{0}' (expected resources, backlog, development, review, changes, or completed)")]
    UnknownColumn(String),
    #[error("unknown priority '{0}' (expected low, medium, high, or urgent)")]
    UnknownPriority(String),
    #[error("unknown project type '{0}' (expected website, app, or both)")]
    UnknownProjectType(String),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("could not open data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let data_dir = cli
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir);
    let mut storage = FileStorage::open(&data_dir)?;
    let json = cli.json;

    // Session commands run before the gate; everything else behind it
    match cli.command {
        Commands::Login(args) => return cmd_login(&mut storage, args),
        Commands::Logout => {
            session::sign_out(&mut storage);
            println!("signed out");
            return Ok(());
        }
        _ => {}
    }
    if !session::is_authenticated(&storage) {
        return Err(CliError::NotSignedIn);
    }

    let mut store = Store::load(storage);
    match cli.command {
        Commands::Login(_) | Commands::Logout => unreachable!("handled above"),
        Commands::Project(args) => match args.command {
            ProjectCommands::Add(args) => cmd_project_add(&mut store, args, json),
            ProjectCommands::Edit(args) => cmd_project_edit(&mut store, args),
            ProjectCommands::Rm(args) => cmd_project_rm(&mut store, args),
            ProjectCommands::Switch(args) => cmd_project_switch(&mut store, args),
            ProjectCommands::List => cmd_project_list(&store, json),
        },
        Commands::Task(args) => match args.command {
            TaskCommands::Add(args) => cmd_task_add(&mut store, args, json),
            TaskCommands::Edit(args) => cmd_task_edit(&mut store, args),
            TaskCommands::Rm(args) => cmd_task_rm(&mut store, args),
            TaskCommands::Move(args) => cmd_task_move(&mut store, args),
            TaskCommands::Show(args) => cmd_task_show(&store, args, json),
        },
        Commands::Board => cmd_board(&store, json),
        Commands::Search(args) => cmd_search(&mut store, args, json),
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

// Hardcoded demo credentials behind the login gate
const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "123456";

fn cmd_login(storage: &mut FileStorage, args: LoginArgs) -> Result<(), CliError> {
    if args.username != DEMO_USERNAME || args.password != DEMO_PASSWORD {
        return Err(CliError::InvalidCredentials);
    }
    session::sign_in(storage);
    println!("signed in as {}", args.username);
    Ok(())
}

// ---------------------------------------------------------------------------
// Reference resolution and flag parsing
// ---------------------------------------------------------------------------

fn resolve_project(store: &Store<FileStorage>, needle: &str) -> Result<String, CliError> {
    if let Some(p) = store.project(needle) {
        return Ok(p.id.clone());
    }
    let matches: Vec<&Project> = store
        .projects()
        .iter()
        .filter(|p| p.id.starts_with(needle) || p.name.eq_ignore_ascii_case(needle))
        .collect();
    match matches.as_slice() {
        [one] => Ok(one.id.clone()),
        [] => Err(CliError::ProjectNotFound(needle.to_string())),
        _ => Err(CliError::Ambiguous(needle.to_string())),
    }
}

fn resolve_task(store: &Store<FileStorage>, needle: &str) -> Result<String, CliError> {
    if let Some(t) = store.task(needle) {
        return Ok(t.id.clone());
    }
    let matches: Vec<&str> = store
        .tasks()
        .iter()
        .filter(|t| t.id.starts_with(needle))
        .map(|t| t.id.as_str())
        .collect();
    match matches.as_slice() {
        [one] => Ok(one.to_string()),
        [] => Err(CliError::TaskNotFound(needle.to_string())),
        _ => Err(CliError::Ambiguous(needle.to_string())),
    }
}

fn parse_column(s: &str) -> Result<ColumnId, CliError> {
    ColumnId::from_key(&s.to_ascii_lowercase()).ok_or_else(|| CliError::UnknownColumn(s.to_string()))
}

fn parse_priority(s: &str) -> Result<Priority, CliError> {
    Priority::parse(s).ok_or_else(|| CliError::UnknownPriority(s.to_string()))
}

fn parse_priority_filter(s: &str) -> Result<PriorityFilter, CliError> {
    PriorityFilter::parse(s).ok_or_else(|| CliError::UnknownPriority(s.to_string()))
}

fn parse_project_type(s: &str) -> Result<ProjectType, CliError> {
    ProjectType::parse(s).ok_or_else(|| CliError::UnknownProjectType(s.to_string()))
}

/// Split a stored cost display string back into currency + amount for
/// edit prefill. Presentation-layer concern: the store treats cost as
/// one opaque string.
fn split_cost(cost: &str) -> (&str, &str) {
    match cost.split_once(' ') {
        Some((currency, amount)) => (currency, amount),
        None => ("$", cost),
    }
}

fn compose_cost(currency: &str, amount: &str) -> String {
    format!("{} {}", currency, amount)
}

// ---------------------------------------------------------------------------
// Project commands
// ---------------------------------------------------------------------------

fn cmd_project_add(
    store: &mut Store<FileStorage>,
    args: ProjectAddArgs,
    json: bool,
) -> Result<(), CliError> {
    if args.name.is_empty() {
        return Err(CliError::EmptyField("project name"));
    }
    let fields = ProjectFields {
        name: args.name,
        client_name: args.client,
        cost: compose_cost(&args.currency, &args.cost),
        timeline: args.timeline,
        project_type: parse_project_type(&args.project_type)?,
    };
    if let Some(project) = store.create_project(fields) {
        if json {
            print_json(&output::project_json(project, true));
        } else {
            println!(
                "created project {} ({}), now active",
                project.name,
                output::short_id(&project.id)
            );
        }
    }
    Ok(())
}

fn cmd_project_edit(store: &mut Store<FileStorage>, args: ProjectEditArgs) -> Result<(), CliError> {
    let id = match &args.project {
        Some(needle) => resolve_project(store, needle)?,
        None => store
            .active_project_id()
            .ok_or(CliError::NoActiveProject)?
            .to_string(),
    };
    let current = store
        .project(&id)
        .ok_or_else(|| CliError::ProjectNotFound(id.clone()))?;

    // Unspecified flags keep the current values (edit prefill)
    let (cur_currency, cur_amount) = split_cost(&current.cost);
    let currency = args.currency.as_deref().unwrap_or(cur_currency);
    let amount = args.cost.as_deref().unwrap_or(cur_amount);
    let name = args.name.clone().unwrap_or_else(|| current.name.clone());
    if name.is_empty() {
        return Err(CliError::EmptyField("project name"));
    }
    let fields = ProjectFields {
        name,
        client_name: args.client.clone().unwrap_or_else(|| current.client_name.clone()),
        cost: compose_cost(currency, amount),
        timeline: args.timeline.clone().unwrap_or_else(|| current.timeline.clone()),
        project_type: match &args.project_type {
            Some(s) => parse_project_type(s)?,
            None => current.project_type,
        },
    };

    store.update_project(&id, fields);
    println!("updated project {}", output::short_id(&id));
    Ok(())
}

fn cmd_project_rm(store: &mut Store<FileStorage>, args: ProjectRefArgs) -> Result<(), CliError> {
    let id = resolve_project(store, &args.project)?;
    let task_count = store.tasks().iter().filter(|t| t.project_id == id).count();
    store.delete_project(&id);
    println!(
        "deleted project {} and {} task(s)",
        output::short_id(&id),
        task_count
    );
    Ok(())
}

fn cmd_project_switch(store: &mut Store<FileStorage>, args: ProjectRefArgs) -> Result<(), CliError> {
    // The store accepts any id; validating here is the caller's job
    let id = resolve_project(store, &args.project)?;
    store.set_active_project(&id);
    if let Some(project) = store.active_project() {
        println!("switched to {}", project.name);
    }
    Ok(())
}

fn cmd_project_list(store: &Store<FileStorage>, json: bool) -> Result<(), CliError> {
    let active = store.active_project_id();
    if json {
        let entries: Vec<_> = store
            .projects()
            .iter()
            .map(|p| output::project_json(p, active == Some(p.id.as_str())))
            .collect();
        print_json(&entries);
        return Ok(());
    }
    if store.projects().is_empty() {
        println!("no projects yet");
        return Ok(());
    }
    for project in store.projects() {
        output::print_project_line(project, active == Some(project.id.as_str()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_task_add(
    store: &mut Store<FileStorage>,
    args: TaskAddArgs,
    json: bool,
) -> Result<(), CliError> {
    if args.title.is_empty() {
        return Err(CliError::EmptyField("task title"));
    }
    let project_id = store
        .active_project_id()
        .ok_or(CliError::NoActiveProject)?
        .to_string();
    let column = parse_column(&args.column)?;
    let fields = TaskFields {
        title: args.title,
        description: args.desc,
        priority: parse_priority(&args.priority)?,
    };
    if let Some(task) = store.create_task(&project_id, column, fields) {
        if json {
            print_json(&output::task_json(task));
        } else {
            println!(
                "added {} to {} ({})",
                task.title,
                task.column_id,
                output::short_id(&task.id)
            );
        }
    }
    Ok(())
}

fn cmd_task_edit(store: &mut Store<FileStorage>, args: TaskEditArgs) -> Result<(), CliError> {
    let id = resolve_task(store, &args.task)?;
    let current = store
        .task(&id)
        .ok_or_else(|| CliError::TaskNotFound(id.clone()))?;

    let title = args.title.clone().unwrap_or_else(|| current.title.clone());
    if title.is_empty() {
        return Err(CliError::EmptyField("task title"));
    }
    let fields = TaskFields {
        title,
        description: args.desc.clone().unwrap_or_else(|| current.description.clone()),
        priority: match &args.priority {
            Some(s) => parse_priority(s)?,
            None => current.priority,
        },
    };

    store.update_task(&id, fields);
    println!("updated task {}", output::short_id(&id));
    Ok(())
}

fn cmd_task_rm(store: &mut Store<FileStorage>, args: TaskRefArgs) -> Result<(), CliError> {
    let id = resolve_task(store, &args.task)?;
    store.delete_task(&id);
    println!("deleted task {}", output::short_id(&id));
    Ok(())
}

fn cmd_task_move(store: &mut Store<FileStorage>, args: TaskMoveArgs) -> Result<(), CliError> {
    let id = resolve_task(store, &args.task)?;
    let target = parse_column(&args.column)?;

    // The move runs through the same two-phase gesture a pointer would
    let mut gesture = MoveGesture::new();
    gesture.begin(&id);
    gesture.drop_on(store, target);

    println!("moved {} to {}", output::short_id(&id), target);
    Ok(())
}

fn cmd_task_show(store: &Store<FileStorage>, args: TaskRefArgs, json: bool) -> Result<(), CliError> {
    let id = resolve_task(store, &args.task)?;
    let task = store
        .task(&id)
        .ok_or_else(|| CliError::TaskNotFound(id.clone()))?;
    if json {
        print_json(&output::task_json(task));
    } else {
        output::print_task_detail(task);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Board and search
// ---------------------------------------------------------------------------

fn cmd_board(store: &Store<FileStorage>, json: bool) -> Result<(), CliError> {
    let Some(project) = store.active_project() else {
        if json {
            print_json(&serde_json::json!({ "project": null, "columns": [] }));
        } else {
            println!("no active project");
        }
        return Ok(());
    };
    let board = store.board();
    if json {
        print_json(&output::board_json(project, &board));
    } else {
        output::print_board(project, &board);
    }
    Ok(())
}

fn cmd_search(store: &mut Store<FileStorage>, args: SearchArgs, json: bool) -> Result<(), CliError> {
    let filter = parse_priority_filter(&args.priority)?;
    store.set_search_query(&args.query);
    store.set_priority_filter(filter);

    let visible = store.visible_tasks();
    if json {
        let entries: Vec<_> = visible.iter().map(|t| output::task_json(t)).collect();
        print_json(&entries);
        return Ok(());
    }
    if visible.is_empty() {
        println!("no matching tasks");
        return Ok(());
    }
    for task in visible {
        println!(
            "[{}] {}  {} ({})",
            task.priority,
            output::short_id(&task.id),
            task.title,
            task.column_id,
        );
    }
    Ok(())
}
