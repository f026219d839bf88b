//! Static profile shown in the hero, head metadata and contact section.

/// Owner details that do not come from the CMS.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    /// `<meta name="keywords">`.
    pub keywords: &'static str,
    /// `<meta name="description">`.
    pub description: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Himanshu Kashyap",
    headline: "Software Developer",
    location: "Dehradun, Uttarakhand",
    summary: "I build web applications and the tooling around them. Scroll on for the places I have \
              worked, the things I have built, and how to reach me.",
    email: "hello@example.com",
    github_url: "https://github.com/",
    linkedin_url: "https://www.linkedin.com/",
    keywords: "himan_kash, himanshu, kashyap, himanshu kashyap, iamhiman, lpu, dehradun, software developer, \
               web developer",
    description: "Hey, I'm Himanshu Kashyap a Software Developer from Dehradun, Uttarakhand. Here's my portfolio \
                  where you can see all my projects, blogs, and achievements.",
};
