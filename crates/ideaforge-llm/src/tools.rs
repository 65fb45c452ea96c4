//! The fixed set of copilot advisory tools.
//!
//! Each tool carries its title, call-to-action, form placeholder, and prompt
//! template. The set is closed: unknown keys are an explicit error case at
//! the route, not a lookup miss inside the pipeline.

use serde::Serialize;

/// A copilot advisory tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopilotTool {
    Market,
    Fundraising,
    Product,
    Mentor,
    Accelerators,
}

impl CopilotTool {
    /// All tools, in display order.
    pub const ALL: &'static [CopilotTool] = &[
        CopilotTool::Market,
        CopilotTool::Fundraising,
        CopilotTool::Product,
        CopilotTool::Mentor,
        CopilotTool::Accelerators,
    ];

    /// Look up a tool by its URL key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "market" => Some(CopilotTool::Market),
            "fundraising" => Some(CopilotTool::Fundraising),
            "product" => Some(CopilotTool::Product),
            "mentor" => Some(CopilotTool::Mentor),
            "accelerators" => Some(CopilotTool::Accelerators),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CopilotTool::Market => "market",
            CopilotTool::Fundraising => "fundraising",
            CopilotTool::Product => "product",
            CopilotTool::Mentor => "mentor",
            CopilotTool::Accelerators => "accelerators",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CopilotTool::Market => "AI-Powered Market Analysis & Competitive Insights",
            CopilotTool::Fundraising => "Fundraising & Investor Readiness",
            CopilotTool::Product => "Product Development & Growth Strategies",
            CopilotTool::Mentor => "24/7 AI-Powered Startup Mentorship",
            CopilotTool::Accelerators => "Optimized for Accelerators & Incubators",
        }
    }

    pub fn cta(&self) -> &'static str {
        match self {
            CopilotTool::Market => "Analyze Market",
            CopilotTool::Fundraising => "Assess Investor Readiness",
            CopilotTool::Product => "Generate Strategy",
            CopilotTool::Mentor => "Get Mentor Advice",
            CopilotTool::Accelerators => "Optimize for YC/Techstars",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CopilotTool::Market => {
                "Describe your startup, target customers, and what problem you solve..."
            }
            CopilotTool::Fundraising => {
                "Paste your pitch summary, traction, revenue model, team, and fundraising goal..."
            }
            CopilotTool::Product => {
                "Describe your product vision, user journey, and current stage..."
            }
            CopilotTool::Mentor => {
                "Ask any startup question (hiring, pricing, legal, growth, ops)..."
            }
            CopilotTool::Accelerators => {
                "Paste your accelerator application draft or company summary..."
            }
        }
    }

    /// Build the full prompt for this tool with the user's input substituted.
    pub fn prompt(&self, user_input: &str) -> String {
        format!("{}\n{}", self.template(), user_input)
    }

    fn template(&self) -> &'static str {
        match self {
            CopilotTool::Market => {
                "You are a senior startup analyst. Provide concise, practical analysis.\n\
                 Return markdown with these sections:\n\
                 ## Summary\n\
                 ## Market Trends (3-5 bullets)\n\
                 ## ICP & Customer Insights (3-5 bullets)\n\
                 ## Competitor Benchmark (table with: Competitor | Offering | Strengths | Gaps)\n\
                 ## Risks & Mitigations (bulleted)\n\
                 ## Actionable Next Steps (numbered, high-impact)\n\n\
                 Startup context:"
            }
            CopilotTool::Fundraising => {
                "Act as a VC analyst preparing a founder for fundraising.\n\
                 Return markdown with:\n\
                 ## Readiness Score (0-100) with rationale\n\
                 ## Pitch Deck Audit (slide-by-slide: Problem, Solution, Market, Product, GTM, \
                 Traction, Business Model, Competition, Team, Financials, Ask)\n\
                 ## Risks & Diligence Questions (bullets)\n\
                 ## Financial Snapshot Template (table)\n\
                 ## Investor Targeting (5-10 relevant theses/firms)\n\
                 ## Action Plan (0-30 days, 30-60 days)\n\n\
                 Founder input:"
            }
            CopilotTool::Product => {
                "You are a staff product manager and growth lead.\n\
                 Return markdown with:\n\
                 ## MVP Scope (must-have features, acceptance criteria)\n\
                 ## Architecture Sketch (high-level components)\n\
                 ## Tech Stack Options (table: Layer | Option | Why | Trade-offs)\n\
                 ## GTM Plan (channels, ICP messaging, lighthouse use cases)\n\
                 ## North Star Metric & KPIs (definitions)\n\
                 ## Experiment Backlog (5-8 tests with hypothesis, metric, effort/impact)\n\n\
                 Context:"
            }
            CopilotTool::Mentor => {
                "You are a pragmatic startup mentor. Answer clearly and concisely.\n\
                 Return markdown with:\n\
                 ## Direct Answer\n\
                 ## Decision Factors (bullets)\n\
                 ## Pitfalls to Avoid (bullets)\n\
                 ## Playbook Steps (numbered checklist)\n\n\
                 Question:"
            }
            CopilotTool::Accelerators => {
                "You help founders succeed in accelerators (YC, Techstars, Seedcamp).\n\
                 Return markdown with:\n\
                 ## Acceptance Likelihood (Low/Med/High) + rationale\n\
                 ## Application Edits (bullet improvements; be concrete and concise)\n\
                 ## Interview Prep (10 likely questions + strong sample answers)\n\
                 ## Milestones to Hit (next 6-8 weeks)\n\
                 ## Social Proof Ideas (advisors, pilots, press, metrics)\n\n\
                 Application/company context:"
            }
        }
    }
}
