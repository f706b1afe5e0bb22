use crate::model::{Asset, AssetKind, Project, Task};

/// The embedded fallback project, shown whenever the remote document
/// cannot be fetched: two tasks, five assets spanning every kind.
pub fn sample_project() -> Project {
    Project {
        id: "ddugky-001".into(),
        name: "Example DT Project (sample)".into(),
        tasks: vec![
            Task {
                id: "t101".into(),
                name: "Introduction & Reading".into(),
                meta: "Contains articles and podcasts".into(),
                assets: vec![
                    asset(
                        "a1",
                        "Intro Article: Understanding DTthon",
                        AssetKind::Article,
                        "https://deepthought.education/",
                        "A short article about DeepThought's DTthon process and assessment philosophy.",
                    ),
                    asset(
                        "a2",
                        "Orientation Video",
                        AssetKind::Video,
                        "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4",
                        "Short video explaining how the selection process works.",
                    ),
                    asset(
                        "a3",
                        "Founder Podcast (audio)",
                        AssetKind::Audio,
                        "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
                        "Listen to the founder discuss the vision.",
                    ),
                ],
            },
            Task {
                id: "t102".into(),
                name: "Practical Task".into(),
                meta: "Hands-on assets (files, links)".into(),
                assets: vec![
                    asset(
                        "b1",
                        "Assignment PDF",
                        AssetKind::File,
                        "https://example.com/sample.pdf",
                        "Downloadable assignment spec for the practical task.",
                    ),
                    asset(
                        "b2",
                        "Reference Video",
                        AssetKind::Video,
                        "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4",
                        "Reference demonstration.",
                    ),
                ],
            },
        ],
    }
}

fn asset(id: &str, title: &str, kind: AssetKind, url: &str, description: &str) -> Asset {
    Asset {
        id: id.into(),
        title: title.into(),
        kind,
        description: description.into(),
        url: Some(url.into()),
        subtype: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let project = sample_project();
        assert_eq!(project.tasks.len(), 2);
        let asset_count: usize = project.tasks.iter().map(|t| t.assets.len()).sum();
        assert_eq!(asset_count, 5);
        // Every kind except one is represented; articles appear once
        assert!(
            project.tasks[0]
                .assets
                .iter()
                .any(|a| a.kind == AssetKind::Audio)
        );
        assert!(
            project.tasks[1]
                .assets
                .iter()
                .any(|a| a.kind == AssetKind::File)
        );
    }
}
