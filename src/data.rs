//! Static portfolio content.
//!
//! The markup-equivalent of the original page: sections, project pages,
//! certificates, timeline entries, and skill groups, fixed at startup.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// In-page sections targeted by the navigation links, in document order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("certificates", "Certificates"),
    ("skills", "Skills"),
];

/// Fixed partition size for the paginated project grid.
pub const PROJECTS_PER_PAGE: usize = 3;

/// Text revealed by the hero terminal typing effect.
pub const TERMINAL_OUTPUT: &str = "uptime: 6+ years keeping infrastructure online\n\
services: networks, servers, backups, people\n\
status: available for new challenges";

/// Hero background image, preloaded at startup.
pub const HERO_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&w=2072&q=80";

/// One project card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// A certificate card with its issuer's brand color.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub icon_class: String,
    pub logo_color: String,
}

/// One entry in the experience timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    pub summary: String,
}

/// A named group of skill tags.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub tags: Vec<String>,
}

fn project(title: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        title: title.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

/// Projects pre-partitioned into fixed pages; the partition count drives
/// the pagination state.
pub fn project_pages() -> Vec<Vec<Project>> {
    projects().chunks(PROJECTS_PER_PAGE).map(<[Project]>::to_vec).collect()
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "Zero-Downtime Mail Migration",
            "Moved 400 mailboxes from an aging on-prem Exchange to a hosted \
             platform over two weekends, with staged DNS cutover and no lost mail.",
            &["Exchange", "PowerShell", "DNS"],
        ),
        project(
            "Infrastructure Monitoring Stack",
            "Rolled out Prometheus, Grafana, and Alertmanager across 60 hosts; \
             paging now fires before users notice an outage.",
            &["Prometheus", "Grafana", "Linux"],
        ),
        project(
            "Fleet Provisioning with Ansible",
            "Replaced hand-built servers with Ansible roles and a golden-image \
             pipeline; a new host goes from rack to production in 20 minutes.",
            &["Ansible", "Packer", "Git"],
        ),
        project(
            "Office Network Redesign",
            "Segmented a flat /16 into routed VLANs with firewall policy per \
             zone, doubling throughput and containing broadcast storms.",
            &["MikroTik", "VLAN", "Firewall"],
        ),
        project(
            "Backup and Disaster Recovery",
            "Designed a 3-2-1 backup scheme with quarterly restore drills; \
             last full-site recovery test completed in under four hours.",
            &["Proxmox Backup", "ZFS", "Bash"],
        ),
        project(
            "Single Sign-On Rollout",
            "Consolidated five credential silos behind Keycloak with LDAP \
             federation and MFA for all remote access.",
            &["Keycloak", "LDAP", "MFA"],
        ),
    ]
}

pub fn certificates() -> Vec<Certificate> {
    let cert = |title: &str, issuer: &str, icon_class: &str, logo_color: &str| Certificate {
        title: title.to_owned(),
        issuer: issuer.to_owned(),
        icon_class: icon_class.to_owned(),
        logo_color: logo_color.to_owned(),
    };
    vec![
        cert("CCNA", "Cisco", "fas fa-network-wired", "#049fd9"),
        cert("RHCSA", "Red Hat", "fab fa-redhat", "#ee0000"),
        cert("CompTIA Security+", "CompTIA", "fas fa-shield-halved", "#e21836"),
        cert("AWS SysOps Administrator", "Amazon Web Services", "fab fa-aws", "#ff9900"),
        cert("Network Administrator (BNSP)", "BNSP", "fas fa-certificate", "#1f6feb"),
    ]
}

pub fn timeline() -> Vec<TimelineEntry> {
    let entry = |period: &str, role: &str, company: &str, summary: &str| TimelineEntry {
        period: period.to_owned(),
        role: role.to_owned(),
        company: company.to_owned(),
        summary: summary.to_owned(),
    };
    vec![
        entry(
            "2022 — present",
            "Senior System Administrator",
            "PT Nusantara Data",
            "Own the server fleet and network for three sites; lead the \
             monitoring, automation, and disaster-recovery programs.",
        ),
        entry(
            "2019 — 2022",
            "System Administrator",
            "Arka Hosting",
            "Operated shared and dedicated hosting for 200+ customers; cut \
             ticket backlog by half through runbook automation.",
        ),
        entry(
            "2017 — 2019",
            "IT Support Engineer",
            "CV Mitra Solusi",
            "First-line support for 120 seats; built the imaging workflow \
             that standardized every desktop in the company.",
        ),
    ]
}

pub fn skill_groups() -> Vec<SkillGroup> {
    let group = |name: &str, tags: &[&str]| SkillGroup {
        name: name.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    };
    vec![
        group(
            "Systems",
            &["Linux", "Windows Server", "Proxmox", "VMware", "ZFS", "Docker"],
        ),
        group(
            "Networking",
            &["MikroTik", "Cisco IOS", "VLANs", "WireGuard", "DNS", "DHCP"],
        ),
        group(
            "Automation & Tooling",
            &["Ansible", "Bash", "PowerShell", "Python", "Git", "Prometheus"],
        ),
    ]
}
