// Fixed demo dataset. Ids are stable so reseeding never duplicates rows.

pub const DEMO_WORKSPACE_ID: &str = "demo-workspace";
pub const DEMO_WORKSPACE_NAME: &str = "Demo Workspace";
pub const DEMO_WORKSPACE_SLUG: &str = "demo";

/// Shared by every demo account
pub const DEMO_PASSWORD: &str = "demo1234";

pub struct DemoDepartment {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub is_active: bool,
}

pub struct DemoUser {
    pub id: &'static str,
    pub email: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub struct DemoTask {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
    /// Email of the demo user the task is assigned to
    pub assignee: Option<&'static str>,
}

pub const DEPARTMENTS: &[DemoDepartment] = &[
    DemoDepartment {
        id: "demo-dept-engineering",
        name: "Engineering",
        description: "Product development and infrastructure",
        is_active: true,
    },
    DemoDepartment {
        id: "demo-dept-marketing",
        name: "Marketing",
        description: "Brand, campaigns and content",
        is_active: true,
    },
    DemoDepartment {
        id: "demo-dept-operations",
        name: "Operations",
        description: "Finance, legal and office management",
        is_active: true,
    },
    DemoDepartment {
        id: "demo-dept-sales",
        name: "Sales",
        description: "Pipeline and customer accounts",
        is_active: true,
    },
    DemoDepartment {
        id: "demo-dept-legacy",
        name: "Legacy Support",
        description: "Retired team, kept for history",
        is_active: false,
    },
];

pub const USERS: &[DemoUser] = &[
    DemoUser {
        id: "demo-user-admin",
        email: "admin@demo.local",
        name: "Demo Admin",
        role: "admin",
    },
    DemoUser {
        id: "demo-user-manager",
        email: "manager@demo.local",
        name: "Demo Manager",
        role: "manager",
    },
    DemoUser {
        id: "demo-user-member",
        email: "member@demo.local",
        name: "Demo Member",
        role: "member",
    },
];

pub const TASKS: &[DemoTask] = &[
    DemoTask {
        id: "demo-task-onboarding",
        title: "Prepare onboarding checklist",
        description: "Collect accounts and documents new hires need on day one",
        status: "todo",
        priority: "medium",
        assignee: Some("manager@demo.local"),
    },
    DemoTask {
        id: "demo-task-release",
        title: "Ship quarterly release",
        description: "Cut the release branch and run the smoke tests",
        status: "in_progress",
        priority: "high",
        assignee: Some("member@demo.local"),
    },
    DemoTask {
        id: "demo-task-budget",
        title: "Review department budgets",
        description: "Compare spend against plan for every active department",
        status: "todo",
        priority: "high",
        assignee: Some("admin@demo.local"),
    },
    DemoTask {
        id: "demo-task-newsletter",
        title: "Draft customer newsletter",
        description: "Summarize the release highlights for customers",
        status: "done",
        priority: "low",
        assignee: None,
    },
];
