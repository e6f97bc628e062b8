use crate::remote::RemoteDescriptor;
use std::fmt;

/// The fixed sections of the hosting checklist, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    RepositorySettings,
    Actions,
    ExpectedUrl,
    ManualDeployment,
    Troubleshooting,
    NextSteps,
}

impl SectionKind {
    pub const ALL: [Self; 6] = [
        Self::RepositorySettings,
        Self::Actions,
        Self::ExpectedUrl,
        Self::ManualDeployment,
        Self::Troubleshooting,
        Self::NextSteps,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RepositorySettings => "📋 Repository settings",
            Self::Actions => "⚙️  GitHub Actions",
            Self::ExpectedUrl => "🌐 Expected URL",
            Self::ManualDeployment => "🚀 Manual deployment",
            Self::Troubleshooting => "🩺 Troubleshooting",
            Self::NextSteps => "✨ Next steps",
        }
    }

    /// Steps are numbered, everything else is a bullet list.
    const fn numbered(self) -> bool {
        matches!(self, Self::ManualDeployment | Self::NextSteps)
    }
}

/// One titled block of checklist lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

/// The complete, rendered-on-demand hosting checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    repository: String,
    hosting_url: String,
    sections: Vec<Section>,
}

impl Checklist {
    /// Builds all six sections for `descriptor`, with the app served under `site_path`.
    #[must_use]
    pub fn new(descriptor: &RemoteDescriptor, site_path: &str) -> Self {
        let hosting_url = descriptor.hosting_url(site_path);
        let sections = SectionKind::ALL
            .into_iter()
            .map(|kind| Section { kind, lines: section_lines(kind, descriptor, &hosting_url) })
            .collect();

        Self { repository: descriptor.to_string(), hosting_url, sections }
    }

    /// `owner/repository` the checklist was built for.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    #[must_use]
    pub fn hosting_url(&self) -> &str {
        &self.hosting_url
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

fn section_lines(kind: SectionKind, remote: &RemoteDescriptor, hosting_url: &str) -> Vec<String> {
    let owner = remote.owner();
    let repository = remote.repository();

    match kind {
        SectionKind::RepositorySettings => vec![
            format!("Open {}", remote.settings_url()),
            "Under \"Build and deployment\", set Source to \"GitHub Actions\"".to_owned(),
            format!("Make sure {owner}/{repository} is public, or that your plan allows Pages on private repositories"),
            "Leave \"Custom domain\" empty unless you own one".to_owned(),
        ],
        SectionKind::Actions => vec![
            format!("Open {}", remote.actions_url()),
            "Check that the latest \"Deploy to GitHub Pages\" run finished successfully".to_owned(),
            "Settings → Actions → General: allow actions and grant \"Read and write\" workflow permissions".to_owned(),
            "The deploy workflow needs `pages: write` and `id-token: write` permissions".to_owned(),
        ],
        SectionKind::ExpectedUrl => vec![
            format!("Your app should be live at: {hosting_url}"),
            format!("Repository: {}", remote.repository_url()),
        ],
        SectionKind::ManualDeployment => vec![
            "npm ci".to_owned(),
            "npm run build".to_owned(),
            "git push origin main (or trigger \"Run workflow\" from the Actions tab)".to_owned(),
            format!("Wait for the workflow to finish, then open {hosting_url}"),
        ],
        SectionKind::Troubleshooting => vec![
            "404 right after the first deployment: Pages can take a few minutes to propagate".to_owned(),
            "Blank page: assets are requested from the wrong path, check the bundler base path".to_owned(),
            "Stale content: hard refresh (Ctrl+Shift+R) to bypass cached bundles".to_owned(),
            "Workflow fails on build: run `npm run build` locally and fix the reported errors".to_owned(),
            format!("Still stuck: compare the deployment log at {}", remote.actions_url()),
        ],
        SectionKind::NextSteps => vec![
            "Push a commit to main to trigger a deployment".to_owned(),
            format!("Visit {hosting_url} once the workflow is green"),
            format!("Share the link with the {owner} team"),
        ],
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔍 GitHub Pages configuration check for {}", self.repository)?;
        writeln!(f, "{:=<60}", "")?;

        for section in &self.sections {
            writeln!(f, "\n{}", section.kind.title())?;
            for (index, line) in section.lines.iter().enumerate() {
                if section.kind.numbered() {
                    writeln!(f, "   {}. {line}", index + 1)?;
                } else {
                    writeln!(f, "   • {line}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist() -> Checklist {
        let remote = RemoteDescriptor::parse("git@github.com:Acme/widget.git").unwrap();
        Checklist::new(&remote, "3d-printer-suite")
    }

    #[test]
    fn builds_six_sections_in_order() {
        let kinds: Vec<_> = checklist().sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL);
        assert!(checklist().sections().iter().all(|s| !s.lines.is_empty()));
    }

    #[test]
    fn expected_url_section_carries_hosting_url() {
        let checklist = checklist();
        let expected = checklist.section(SectionKind::ExpectedUrl).unwrap();
        assert!(expected.lines[0].ends_with("https://acme.github.io/widget/3d-printer-suite/"));
    }

    #[test]
    fn rendering_substitutes_owner_and_repository() {
        let rendered = checklist().to_string();

        assert!(rendered.starts_with("🔍 GitHub Pages configuration check for Acme/widget\n"));
        assert!(rendered.contains("https://github.com/Acme/widget/settings/pages"));
        assert!(rendered.contains("   1. npm ci\n"));
        assert!(!rendered.contains("undefined"));

        let positions: Vec<_> = SectionKind::ALL
            .iter()
            .map(|kind| rendered.find(kind.title()).expect("section title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections out of order");
    }
}
