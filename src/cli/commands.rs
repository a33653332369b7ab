use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fb", about = concat!("[=] flowban v", env!("CARGO_PKG_VERSION"), " - six columns, one board"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in (demo account: demo / 123456)
    Login(LoginArgs),
    /// Sign out
    Logout,
    /// Manage projects
    Project(ProjectCmd),
    /// Manage tasks on the active project's board
    Task(TaskCmd),
    /// Show the active project's board
    Board,
    /// Search the active project's tasks
    Search(SearchArgs),
}

// ---------------------------------------------------------------------------
// Session args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Project args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectCmd {
    #[command(subcommand)]
    pub command: ProjectCommands,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a project and make it active
    Add(ProjectAddArgs),
    /// Edit a project (defaults to the active one)
    Edit(ProjectEditArgs),
    /// Delete a project and all of its tasks
    Rm(ProjectRefArgs),
    /// Switch the active project
    Switch(ProjectRefArgs),
    /// List all projects
    List,
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Project name
    pub name: String,
    /// Client name
    #[arg(long, default_value = "")]
    pub client: String,
    /// Currency symbol for the cost
    #[arg(long, default_value = "$")]
    pub currency: String,
    /// Cost amount (free text, e.g. "5,000")
    #[arg(long, default_value = "")]
    pub cost: String,
    /// Timeline (free text, e.g. "4 Weeks")
    #[arg(long, default_value = "")]
    pub timeline: String,
    /// Project type: website, app, or both
    #[arg(long = "type", default_value = "website")]
    pub project_type: String,
}

#[derive(Args)]
pub struct ProjectEditArgs {
    /// Project to edit, by id prefix or name (default: active project)
    pub project: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub client: Option<String>,
    /// Currency symbol (keeps the current one if only --cost is given)
    #[arg(long)]
    pub currency: Option<String>,
    /// Cost amount (keeps the current one if only --currency is given)
    #[arg(long)]
    pub cost: Option<String>,
    #[arg(long)]
    pub timeline: Option<String>,
    /// Project type: website, app, or both
    #[arg(long = "type")]
    pub project_type: Option<String>,
}

#[derive(Args)]
pub struct ProjectRefArgs {
    /// Project, by id prefix or name
    pub project: String,
}

// ---------------------------------------------------------------------------
// Task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TaskCmd {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a column of the active project
    Add(TaskAddArgs),
    /// Edit a task's title, description, or priority
    Edit(TaskEditArgs),
    /// Delete a task
    Rm(TaskRefArgs),
    /// Move a task to another column
    Move(TaskMoveArgs),
    /// Show task details
    Show(TaskRefArgs),
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task title
    pub title: String,
    /// Description
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Priority: low, medium, high, or urgent
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// Target column (resources, backlog, development, review, changes, completed)
    #[arg(long, default_value = "backlog")]
    pub column: String,
}

#[derive(Args)]
pub struct TaskEditArgs {
    /// Task id (a unique prefix is enough)
    pub task: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub desc: Option<String>,
    /// Priority: low, medium, high, or urgent
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task id (a unique prefix is enough)
    pub task: String,
}

#[derive(Args)]
pub struct TaskMoveArgs {
    /// Task id (a unique prefix is enough)
    pub task: String,
    /// Target column (resources, backlog, development, review, changes, completed)
    pub column: String,
}

// ---------------------------------------------------------------------------
// Search args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SearchArgs {
    /// Text to match against task titles and descriptions
    #[arg(default_value = "")]
    pub query: String,
    /// Only show one priority (low, medium, high, urgent; default all)
    #[arg(long, default_value = "all")]
    pub priority: String,
}
