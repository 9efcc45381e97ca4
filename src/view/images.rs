pub const DEFAULT_IMAGE: &str = "generic-banner.jpg";

// checked in order, first keyword found in the lowercased title wins
const TITLE_IMAGES: &[(&str, &str)] = &[
    ("linkedin", "linkedin.jpg"),
    ("career options", "career-options.jpg"),
    ("job search", "job-search.jpg"),
    ("interview success", "interview-success.jpg"),
    ("strong application", "strong-application.jpg"),
    ("beyond the degree", "beyond-degree.jpg"),
    ("are you graduating soon?", "graduating.jpg"),
    ("coffee meetup", "coffee-meetup.jpg"),
    ("looking for casual or part-time work", "casual-part-time-work.jpg"),
    ("australian workplace culture", "australian-work-culture.jpg"),
    ("know your working rights", "working-rights.jpg"),
    ("employer month", "employer-month.jpg"),
];

pub fn image_for(title: &str) -> &'static str {
    let title = title.to_lowercase();
    TITLE_IMAGES
        .iter()
        .find(|(kw, _)| title.contains(kw))
        .map(|(_, img)| *img)
        .unwrap_or(DEFAULT_IMAGE)
}
