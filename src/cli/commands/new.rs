use std::path::Path;

use chrono::Local;
use log::info;

use crate::theme::STATIC_DIR;
use crate::utils::error::{BoxResult, SiteResult};
use crate::utils::fs;

const CONFIG_FILE: &str = "\
# Site configuration
content_dir: content
output_dir: output
themes_dir: themes
theme: default
sort_by: created_desc

# Variables available to every template
site:
  title: My inkpress site
  description: Posts written in markdown
";

const BLANK_CONFIG_FILE: &str = "\
# Site configuration
theme: default
";

const LIST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="static/style.css">
</head>
<body>
  <header>
    <h1>{{ title }}</h1>
    <p>{{ description }}</p>
  </header>
  <main>
    <ul class="posts">
    {% for post in posts %}
      <li><a href="{{ post.path }}">{{ post.title }}</a> <time>{{ post.created }}</time></li>
    {% endfor %}
    </ul>
  </main>
</body>
</html>
"#;

const SINGLE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ post.title }} | {{ title }}</title>
  <link rel="stylesheet" href="static/style.css">
</head>
<body>
  <header><a href="index.html">{{ title }}</a></header>
  <main>
    <article>
      <h1>{{ post.title }}</h1>
      <time>{{ post.created }}</time>
      {{ post.content }}
    </article>
  </main>
</body>
</html>
"#;

const BLANK_LIST_TEMPLATE: &str = r#"{% for post in posts %}<a href="{{ post.path }}">{{ post.slug }}</a>
{% endfor %}"#;

const BLANK_SINGLE_TEMPLATE: &str = "{{ post.content }}\n";

const STYLESHEET: &str = "\
body { max-width: 42rem; margin: 2rem auto; font-family: sans-serif; line-height: 1.6; }
.posts { list-style: none; padding: 0; }
time { color: #666; font-size: 0.9em; }
";

/// Handle the 'new' command to create a new site
pub fn handle_new_command(path: &Path, force: bool, blank: bool) -> BoxResult<()> {
    info!("Creating new site at {}", path.display());

    if path.exists() {
        let is_empty = path.read_dir()?.next().is_none();
        if !is_empty && !force {
            return Err(format!(
                "Directory '{}' exists and is not empty. Use --force to overwrite.",
                path.display()
            )
            .into());
        }
        if force {
            info!("Force option specified. Continuing despite existing directory.");
        }
    }

    scaffold_site(path, blank)?;

    info!("New site created successfully at {}", path.display());
    info!("Run 'inkpress build -s {}' to generate it", path.display());
    Ok(())
}

/// Write the config, content and default theme of a new site under `site_path`
pub fn scaffold_site(site_path: &Path, blank: bool) -> SiteResult<()> {
    let content_dir = site_path.join("content");
    let theme_dir = site_path.join("themes").join("default");
    let static_dir = theme_dir.join(STATIC_DIR);

    for dir in [&content_dir, &static_dir] {
        fs::create_directory(dir)?;
        info!("Created directory: {}", dir.display());
    }

    let (config, list, single) = if blank {
        (BLANK_CONFIG_FILE, BLANK_LIST_TEMPLATE, BLANK_SINGLE_TEMPLATE)
    } else {
        (CONFIG_FILE, LIST_TEMPLATE, SINGLE_TEMPLATE)
    };

    write_scaffold_file(&site_path.join("_config.yml"), config)?;
    write_scaffold_file(&theme_dir.join("list.html"), list)?;
    write_scaffold_file(&theme_dir.join("single.html"), single)?;
    write_scaffold_file(&static_dir.join("style.css"), STYLESHEET)?;

    if !blank {
        let post = format!(
            "title: Welcome\ncreated: {}\n---\n\
             This is your first post. Edit or delete it, then rebuild the site.\n",
            Local::now().format("%Y-%m-%d")
        );
        write_scaffold_file(&content_dir.join("welcome.md"), &post)?;
    }

    Ok(())
}

fn write_scaffold_file(path: &Path, contents: &str) -> SiteResult<()> {
    fs::write_file(path, contents)?;
    info!("Created file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scaffold_creates_site_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blog");
        scaffold_site(&root, false).unwrap();

        assert!(root.join("_config.yml").is_file());
        assert!(root.join("content/welcome.md").is_file());
        assert!(root.join("themes/default/list.html").is_file());
        assert!(root.join("themes/default/single.html").is_file());
        assert!(root.join("themes/default/static/style.css").is_file());
    }

    #[test]
    fn test_blank_scaffold_has_no_posts() {
        let temp = TempDir::new().unwrap();
        scaffold_site(temp.path(), true).unwrap();

        assert!(temp.path().join("content").is_dir());
        assert_eq!(std::fs::read_dir(temp.path().join("content")).unwrap().count(), 0);
    }

    #[test]
    fn test_new_refuses_non_empty_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("existing.txt"), "keep").unwrap();

        assert!(handle_new_command(temp.path(), false, false).is_err());
        assert!(handle_new_command(temp.path(), true, false).is_ok());
        assert!(temp.path().join("existing.txt").is_file());
    }
}
