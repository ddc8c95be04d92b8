use anyhow::{Context, Result};
use readmenav::pages::document::{self, DocumentPageData};
use readmenav::{
    Config, ContentFetcher, DEFAULT_BRANCH, FileFetcher, GitFetcher, MarkdownRenderer,
    OutlineEntry, RepoCoordinates, breadcrumb, build_tree, format_title, parse_outline,
    without_title, write_css_assets,
};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// README path used for link resolution of committed READMEs.
const README_PATH: &str = "README.md";

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    let git = GitFetcher::new(&config.repo);
    let branch = match &config.branch {
        Some(branch) => branch.clone(),
        None => git.default_branch().unwrap_or_else(|e| {
            warn!("Failed to read HEAD, using {}: {:#}", DEFAULT_BRANCH, e);
            DEFAULT_BRANCH.to_string()
        }),
    };

    let name = config.project_name()?;
    let coords = RepoCoordinates::new(config.owner.clone().unwrap_or_default(), &name, branch);

    let (fetcher, readme_path): (Box<dyn ContentFetcher>, &Path) = match &config.file {
        Some(file) => (
            Box::new(FileFetcher::new(file)),
            match file.strip_prefix(&config.repo) {
                Ok(relative) => relative,
                Err(_) if file.is_relative() => file.as_path(),
                Err(_) => Path::new(README_PATH),
            },
        ),
        None => (Box::new(git.clone()), Path::new(README_PATH)),
    };

    let readme = fetcher
        .fetch_readme(&coords)
        .context("Failed to fetch README")?;
    let outline = parse_outline(&readme);
    debug!(headings = outline.len(), branch = coords.branch(), "Parsed outline");

    if config.toc {
        print_toc(&outline);
        return Ok(());
    }

    if let Some(active_id) = &config.breadcrumb {
        let trail: Vec<String> = breadcrumb(&outline, active_id)
            .into_iter()
            .map(|crumb| crumb.title)
            .collect();
        println!("{}", trail.join(" > "));
        return Ok(());
    }

    let branches = fetcher.list_branches(&coords).unwrap_or_else(|e| {
        warn!("Failed to list branches: {:#}", e);
        vec![coords.branch().to_string()]
    });

    let title = format_title(&name);
    let (title_node, navigation) = without_title(build_tree(&outline), &title);
    if let Some(node) = &title_node {
        debug!(heading = %node.title, "Using first heading as page title");
    }

    let renderer = if config.owner.is_some() {
        MarkdownRenderer::with_link_resolver(coords.clone(), readme_path)
    } else {
        warn!("No --owner given, relative links are left unchanged");
        MarkdownRenderer::new()
    };
    let readme_html = renderer
        .render(&readme)
        .context("Failed to render README")?;

    let page = document::generate(DocumentPageData {
        title: &title,
        coords: config.owner.is_some().then_some(&coords),
        branch: coords.branch(),
        branches: &branches,
        navigation: &navigation,
        readme_html: &readme_html,
    });

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    write_css_assets(&config.output.join("assets"))?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, page.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    info!(
        sections = navigation.len(),
        "Generated {}",
        index_path.display()
    );

    if config.open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}

/// Logs go to stderr so `--toc` output stays clean on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("readmenav=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints the outline as a nested markdown list of anchor links.
fn print_toc(outline: &[OutlineEntry]) {
    let base = outline.iter().map(OutlineEntry::level).min().unwrap_or(1);
    for entry in outline {
        println!(
            "{}- [{}](#{})",
            "  ".repeat(usize::from(entry.level() - base)),
            entry.text(),
            entry.id()
        );
    }
}
