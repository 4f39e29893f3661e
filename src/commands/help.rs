/// Contents of the `/xkcd help` embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    pub title: String,

    /// Embed fields as (name, value)
    pub fields: Vec<(String, String)>,

    /// Link buttons as (label, url)
    pub links: Vec<(String, String)>,
}

const ABOUT: &str = "This bot provides commands for the xkcd webcomic.\n\
Comics are fetched live from the website; titles for `/xkcd lookup` are refreshed from the archive every few hours.";

const COMMANDS: &str = "`/xkcd get <num>            `- Get a specific xkcd comic by its number\n\
`/xkcd range <first> <last> `- Get a range of xkcd comics from first to last\n\
`/xkcd random               `- Get a random xkcd comic\n\
`/xkcd lookup <name>        `- Get a specific comic by its name\n\
`/xkcd latest               `- Get the latest xkcd\n\
\n\
Any parameter named \"buttons\" controls whether to attach the navigation buttons to the message.";

impl HelpPage {
    /// Builds the help page
    ///
    /// # Arguments
    ///
    /// * `version` - Bot version shown in the title
    /// * `site_url` - Comic site, linked as "xkcd.com"
    /// * `explain_url` - Explainer site, linked as "explain xkcd"
    pub fn new(version: &str, site_url: &str, explain_url: &str) -> Self {
        Self {
            title: format!("xkcd Bot v{}", version),
            fields: vec![
                ("About".to_string(), ABOUT.to_string()),
                ("Commands".to_string(), COMMANDS.to_string()),
            ],
            links: vec![
                ("xkcd.com".to_string(), site_url.to_string()),
                ("explain xkcd".to_string(), explain_url.to_string()),
            ],
        }
    }
}
