//! Static template library for titles, thumbnails and script prose.
//!
//! Title placeholders: `{topic}`, `{rival}`, `{minutes}`, `{steps}`, `{days}`,
//! `{months}`, `{horizon}`. Script placeholders: `{title}`, `{topic}`,
//! `{rival}`, `{hashtag}`.

use vidtrend_core::{Category, Difficulty};

pub(crate) const MINUTE_OPTIONS: &[u32] = &[5, 10, 15, 20, 30];
pub(crate) const STEP_OPTIONS: &[u32] = &[3, 5, 7, 10, 12];
pub(crate) const DAY_OPTIONS: &[u32] = &[7, 14, 30, 60, 90];
pub(crate) const MONTH_OPTIONS: &[u32] = &[1, 3, 6, 12];
pub(crate) const HORIZON_OPTIONS: &[&str] = &[
    "the Next Decade",
    "the Coming Year",
    "Everyday Work",
    "the Next Five Years",
];

/// Used when the mined hashtags cannot fill an idea's hashtag list.
pub(crate) const GENERAL_HASHTAGS: &[&str] = &["#ai", "#machinelearning", "#tech", "#programming"];

pub(crate) struct TalkingPoint {
    pub heading: &'static str,
    pub text: &'static str,
}

pub(crate) struct CategoryTemplate {
    pub titles: &'static [&'static str],
    pub thumbnails: &'static [&'static str],
    pub difficulty: Difficulty,
    pub audience: &'static str,
    pub hashtags: &'static [&'static str],
    pub hook: &'static str,
    pub points: &'static [TalkingPoint],
    pub elaborations: &'static [&'static str],
    pub call_to_action: &'static str,
}

/// Filler sentences any category may draw on once its own run out.
pub(crate) const SHARED_ELABORATIONS: &[&str] = &[
    "A lot of people skip this part of {topic}, and it is usually the reason their results look so different from what they saw in a demo.",
    "If you only remember one thing about {topic} from this section, remember that small, repeatable habits beat one heroic weekend of effort.",
    "I have seen beginners and experienced engineers trip over the same detail in {topic}, so do not feel bad if it takes a second pass to click.",
    "Keep a simple notes file while you work with {topic}; writing down what surprised you is the fastest way to build real intuition.",
    "The official documentation for {topic} is better than its reputation, and the examples section alone answers most of the questions I get.",
    "When something about {topic} feels confusing, shrink the problem until it fits on one screen and then grow it back one piece at a time.",
    "Pay attention to how {topic} behaves on messy, real data, because clean tutorial inputs hide most of the interesting edge cases.",
    "Share what you build with {topic} early, because feedback from other people will catch mistakes you stopped being able to see.",
];

static TUTORIAL: CategoryTemplate = CategoryTemplate {
    titles: &[
        "How to Build with {topic} in {minutes} Minutes",
        "Complete {topic} Tutorial for Beginners",
        "Master {topic} in {steps} Steps",
        "{topic} Explained Simply",
        "Build Your First {topic} Project",
    ],
    thumbnails: &[
        "Split screen: before and after code",
        "Screen recording with arrows pointing to key steps",
        "Person at a laptop with a finished project on screen",
    ],
    difficulty: Difficulty::Medium,
    audience: "Learners/Students",
    hashtags: &["#tutorial", "#coding", "#learnai"],
    hook: "Welcome back! In this video we are going to work through {title}, step by step, so you can follow along on your own machine. No fluff, just the parts that actually matter, and everything you see here is tagged {hashtag} if you want more like it.",
    points: &[
        TalkingPoint {
            heading: "Step 1: Setting up your environment",
            text: "Before we touch {topic}, let's get the environment right. Install a recent version of your tools, create a fresh project folder and keep dependencies isolated so nothing from an old experiment leaks in. Five minutes here saves an hour of confusing errors later.",
        },
        TalkingPoint {
            heading: "Step 2: Understanding the core idea",
            text: "Now for the concept behind {topic}. Think of it as a pipeline: something goes in, a transformation happens, and something useful comes out. Once you can describe each of those three stages in your own words, the code stops looking like magic and starts looking like plumbing.",
        },
        TalkingPoint {
            heading: "Step 3: Writing the first working version",
            text: "Let's write the smallest version of {topic} that actually runs. Resist the urge to add features. Get one input producing one correct output, print the intermediate values, and commit that working state before you change anything else.",
        },
        TalkingPoint {
            heading: "Step 4: Handling the common errors",
            text: "This is where most people get stuck with {topic}. The errors usually fall into three buckets: bad inputs, missing configuration and version mismatches. Read the message slowly, check which bucket you are in, and fix the cause instead of the symptom.",
        },
        TalkingPoint {
            heading: "Step 5: Making it useful",
            text: "With the basics running, we can make {topic} useful for a real task. Swap the toy input for something from your own work, measure how long it takes and how often it is right, and decide which of those two numbers you care about more.",
        },
        TalkingPoint {
            heading: "Step 6: Where to go next",
            text: "Once you are comfortable with {topic}, try combining it with {rival}. Pairing two tools you understand is how small projects turn into portfolio pieces, and it is also the fastest way to find the limits of each one.",
        },
    ],
    elaborations: &[
        "Pause the video here and run the {topic} code yourself before moving on; typing it out beats copying it every single time.",
        "If your {topic} output does not match mine exactly, that is fine, as long as the shape of the result is the same.",
        "I will leave the full {topic} source in the description so you can compare your version line by line.",
    ],
    call_to_action: "Try building this yourself and share your results in the comments! If this tutorial helped, subscribe and turn on notifications so you catch the next one.",
};

static NEWS: CategoryTemplate = CategoryTemplate {
    titles: &[
        "Breaking: {topic} Changes Everything",
        "Latest {topic} Updates You Need to Know",
        "{topic} News This Week",
        "Why {topic} is Trending Now",
        "The Future of {topic} is Here",
    ],
    thumbnails: &[
        "Bold headline text over a glowing screen",
        "Presenter with a surprised expression and a news banner",
        "Timeline graphic with the latest announcement highlighted",
    ],
    difficulty: Difficulty::Easy,
    audience: "AI enthusiasts",
    hashtags: &["#ainews", "#technews", "#tech"],
    hook: "Big things are happening, and this one deserves your attention: {title}. I went through the announcements, the reactions and the fine print so you do not have to. Follow {hashtag} to keep up as the story develops.",
    points: &[
        TalkingPoint {
            heading: "What happened",
            text: "Here is the short version of the {topic} story. A change landed this week that affects how people build with and talk about {topic}, and the reaction online has been loud. Let's separate what was actually announced from what people are guessing.",
        },
        TalkingPoint {
            heading: "Why it matters",
            text: "The reason {topic} is getting so much attention is that it changes the cost of doing something that used to be hard. When a hard thing gets cheap, new people start doing it, and that is usually where the interesting products come from.",
        },
        TalkingPoint {
            heading: "Who is affected",
            text: "If you build products, {topic} probably changes your roadmap a little. If you are learning, it changes what is worth studying first. And if you just use these tools day to day, expect the apps you already know to quietly pick this up.",
        },
        TalkingPoint {
            heading: "What the critics are saying",
            text: "Not everyone is excited about {topic}. The most reasonable criticism I have seen is about reliability and cost at scale, and those are fair questions. Early announcements tend to show the best case, so wait for independent tests before betting on it.",
        },
        TalkingPoint {
            heading: "How it compares",
            text: "It helps to put {topic} next to {rival}. They overlap in places, but they are aimed at different problems, and the news this week widens that gap rather than closing it. Keep that in mind when you read the hot takes.",
        },
        TalkingPoint {
            heading: "What to watch next",
            text: "Over the next few weeks, watch for real usage numbers around {topic}, pricing changes and whether the big platforms adopt it. Those three signals will tell us whether this is a lasting shift or a news cycle.",
        },
    ],
    elaborations: &[
        "I will update the pinned comment if anything about the {topic} story changes after this video goes live.",
        "Take the early {topic} benchmarks with a grain of salt until people outside the launch team have reproduced them.",
        "If you have already tried the new {topic} release, tell me in the comments whether it matched the hype.",
    ],
    call_to_action: "What do you think about this news? Let me know below, and subscribe so you never miss an AI update.",
};

static COMPARISON: CategoryTemplate = CategoryTemplate {
    titles: &[
        "{topic} vs {rival}: Which is Better?",
        "Comparing {topic} and {rival} in {horizon}",
        "{topic} or {rival}? The Ultimate Guide",
        "Why {topic} Beats {rival} Every Time",
        "The Truth About {topic} vs {rival}",
    ],
    thumbnails: &[
        "Side-by-side logos with a VS in the middle",
        "Scoreboard graphic with two columns",
        "Split face reaction shot between two screens",
    ],
    difficulty: Difficulty::Medium,
    audience: "Advanced users",
    hashtags: &["#comparison", "#techreview", "#tech"],
    hook: "Everyone keeps asking me the same question, so today we settle it: {title}. I tested both on the same tasks with the same inputs, and the answer is more interesting than a simple winner. Tag your own results with {hashtag}.",
    points: &[
        TalkingPoint {
            heading: "The contenders",
            text: "On one side we have {topic}, on the other {rival}. Both have loyal fans and both are good at something, so the real question is not which one is best in general but which one is best for the job you actually have in front of you.",
        },
        TalkingPoint {
            heading: "Ease of getting started",
            text: "For a newcomer, {topic} takes a little longer to set up, but the defaults are sensible once it is running. {rival} gets you to a first result faster, and then asks more of you when you try to customise it. Neither is wrong, they just front-load the effort differently.",
        },
        TalkingPoint {
            heading: "Quality of results",
            text: "On my test set, {topic} produced more consistent output, while {rival} had higher peaks and lower valleys. If you need predictable quality for a team, consistency wins. If you are exploring and can throw away bad attempts, the peaks might matter more.",
        },
        TalkingPoint {
            heading: "Speed and cost",
            text: "Speed and cost are where {topic} and {rival} really diverge. Measure both on your own workload, because the published numbers assume ideal conditions. A tool that is twice as fast but three times the price is only a good deal if time is your bottleneck.",
        },
        TalkingPoint {
            heading: "Ecosystem and community",
            text: "The community around {topic} is large and writes a lot of tutorials, which matters more than people admit. {rival} has fewer resources but the ones that exist tend to be deeper. Look at how recently questions were answered before you commit.",
        },
        TalkingPoint {
            heading: "The verdict",
            text: "So which should you pick? Start with {topic} if you want a steady default, and reach for {rival} when you have a specific need it clearly handles better. Most serious users end up keeping both around, and that is a perfectly good answer.",
        },
    ],
    elaborations: &[
        "I ran every {topic} test three times and used the middle result, so a single lucky run did not skew the comparison.",
        "Your numbers for {topic} will differ from mine, so treat this as a method you can repeat rather than a final score.",
        "Switching away from {topic} later is easier than most people think, so do not let the choice paralyse you.",
    ],
    call_to_action: "Which one do you prefer? Vote in the comments and subscribe for more head-to-head comparisons.",
};

static EXPLANATION: CategoryTemplate = CategoryTemplate {
    titles: &[
        "{topic} Explained in {minutes} Minutes",
        "What is {topic}? Everything You Need to Know",
        "Understanding {topic} Once and For All",
        "The Science Behind {topic}",
        "How {topic} Actually Works",
    ],
    thumbnails: &[
        "Clean diagram with labelled arrows and a lightbulb",
        "Whiteboard sketch with the key idea circled",
        "Zoomed-in illustration of the inner workings",
    ],
    difficulty: Difficulty::Hard,
    audience: "Beginners",
    hashtags: &["#explained", "#learnai", "#education"],
    hook: "You have probably heard the term a hundred times, but can you explain it to a friend? By the end of {title}, you will be able to. We start from zero, build up one idea at a time, and skip the jargon. Find the rest of the series under {hashtag}.",
    points: &[
        TalkingPoint {
            heading: "The one-sentence version",
            text: "If you only have ten seconds, {topic} is a way of turning examples into rules that a computer can apply to new situations. Everything else in this video is detail on top of that sentence, so keep it in your head as we go.",
        },
        TalkingPoint {
            heading: "An everyday analogy",
            text: "Think about how you learned to recognise a friend's handwriting. Nobody gave you a rulebook, you just saw enough examples. {topic} works in a surprisingly similar way: lots of examples, a bit of feedback and gradual adjustment until the guesses get good.",
        },
        TalkingPoint {
            heading: "What is happening under the hood",
            text: "Underneath, {topic} is doing a lot of arithmetic very quickly. Inputs become numbers, the numbers are combined with learned weights, and the result is compared with what we wanted. The difference nudges the weights, and that loop repeats millions of times.",
        },
        TalkingPoint {
            heading: "Common misconceptions",
            text: "The biggest misconception about {topic} is that it understands things the way people do. It is very good at patterns, and patterns can look a lot like understanding, but it can also be confidently wrong in ways a person never would.",
        },
        TalkingPoint {
            heading: "How it connects to the bigger picture",
            text: "{topic} does not exist on its own. It builds on ideas from {rival} and feeds into the tools you use every day, so understanding it makes a whole family of related technology easier to follow.",
        },
        TalkingPoint {
            heading: "Putting it all together",
            text: "Let's recap {topic}: examples go in, patterns are learned through repeated small corrections, and the result generalises to new inputs, within limits. If that summary makes sense to you now, you understand more than most people who use the word.",
        },
    ],
    elaborations: &[
        "Do not worry if the maths behind {topic} looks intimidating; the intuition is what matters for now, and the symbols can come later.",
        "A good test of whether you understand {topic} is to explain it out loud without looking at any notes.",
        "I have linked a deeper {topic} resource in the description for anyone who wants the formal version.",
    ],
    call_to_action: "Did this explanation help? Drop your questions below, and subscribe for more breakdowns of complex topics.",
};

static PREDICTION: CategoryTemplate = CategoryTemplate {
    titles: &[
        "Why {topic} Will Dominate {horizon}",
        "The Future of {topic} in {horizon}",
        "{topic} Predictions for {horizon}",
        "What's Next for {topic}?",
        "How {topic} Will Change {horizon}",
    ],
    thumbnails: &[
        "Futuristic cityscape with a glowing trend line",
        "Crystal ball reflecting a circuit board",
        "Rising chart with a bold question mark",
    ],
    difficulty: Difficulty::Medium,
    audience: "General tech audience",
    hashtags: &["#future", "#futuretech", "#innovation"],
    hook: "Let's look ahead. In {title} I am going to make some specific, testable predictions and explain the reasoning behind each one, so you can decide for yourself whether I am right. Save this video and check back, and follow {hashtag} for the updates.",
    points: &[
        TalkingPoint {
            heading: "Where things stand today",
            text: "To predict where {topic} is going we need an honest picture of where it is now. Adoption is growing fast among early users, but most organisations are still experimenting rather than depending on it. That gap is where the next few years will be decided.",
        },
        TalkingPoint {
            heading: "Prediction one: it gets cheaper",
            text: "My first prediction is that {topic} becomes dramatically cheaper to run. Every previous wave of computing followed that curve, and the incentives here are even stronger. Cheaper means more experiments, and more experiments means faster progress.",
        },
        TalkingPoint {
            heading: "Prediction two: it disappears into products",
            text: "Second, {topic} will stop being a feature people talk about and become something they simply expect. The best technology tends to vanish into the background, and the companies that win will be the ones that make it feel boring in a good way.",
        },
        TalkingPoint {
            heading: "Prediction three: new jobs appear",
            text: "Third, {topic} will create roles that do not have names yet. Every major tool shift produces people whose whole job is using that tool well. If you start building those skills now, you will be early rather than scrambling to catch up.",
        },
        TalkingPoint {
            heading: "The risks",
            text: "None of this is guaranteed. Regulation, energy costs or a run of high-profile failures could slow {topic} down, and competition from {rival} could split the market. Good predictions come with the conditions under which they would be wrong.",
        },
        TalkingPoint {
            heading: "How to prepare",
            text: "The practical takeaway: spend a little time each week actually using {topic}, follow a few people who build with it rather than just commenting on it, and keep your expectations grounded in what you can test yourself.",
        },
    ],
    elaborations: &[
        "I made a similar call about {topic} last year, and I will be honest in the comments about where I got it wrong.",
        "Predictions about {topic} are only useful if they can be checked, so I have tried to keep each one concrete.",
        "Notice how often the {topic} timeline gets compressed; things that sounded five years away keep arriving in two.",
    ],
    call_to_action: "Do you agree with these predictions? Share yours in the comments, and subscribe so we can check back on them together.",
};

static REVIEW: CategoryTemplate = CategoryTemplate {
    titles: &[
        "I Tested {topic} for {days} Days",
        "{topic} Review: Is It Worth It?",
        "Honest {topic} Review After {months} Months",
        "The Truth About {topic}",
        "{topic} Deep Dive Review",
    ],
    thumbnails: &[
        "Product shot with a star rating overlay",
        "Thumbs up and thumbs down split image",
        "Presenter holding a verdict card",
    ],
    difficulty: Difficulty::Easy,
    audience: "Potential buyers",
    hashtags: &["#review", "#techreview", "#honestreview"],
    hook: "This is not a sponsored video. In {title} I share exactly what worked, what did not and who should actually spend their time or money on it. Stick around for the verdict at the end, and look for {hashtag} for more honest takes.",
    points: &[
        TalkingPoint {
            heading: "First impressions",
            text: "My first impression of {topic} was better than I expected. Setup was quick, the interface made sense without a manual, and the first result was genuinely useful. First impressions can be misleading though, so let's see how it held up.",
        },
        TalkingPoint {
            heading: "Daily use",
            text: "After using {topic} every day, the strengths became clear. It saves real time on repetitive work, and it rarely gets in the way. The weak spots showed up on unusual requests, where I had to double-check its output more often than I would like.",
        },
        TalkingPoint {
            heading: "What I loved",
            text: "The best thing about {topic} is how it handles the boring middle of a task. It will not replace your judgement, but it removes enough friction that I found myself finishing things I would normally have put off.",
        },
        TalkingPoint {
            heading: "What frustrated me",
            text: "My biggest frustration with {topic} was inconsistency. The same request could produce a great answer on Monday and a mediocre one on Tuesday. For casual use that is fine, but if you need reliability you will need to build checks around it.",
        },
        TalkingPoint {
            heading: "Value for money",
            text: "Is {topic} worth the price? For people who use it daily, almost certainly. For occasional use, the free alternatives, including {rival}, cover most of what you need. Be honest about how often you will open it before you pay.",
        },
        TalkingPoint {
            heading: "Final verdict",
            text: "My verdict on {topic}: a strong tool with real limits. I am keeping it in my workflow, but I am not using it for anything where a mistake would be expensive. If that trade-off works for you, it is easy to recommend.",
        },
    ],
    elaborations: &[
        "I paid for {topic} myself, so nobody had a say in what made it into this review.",
        "Your experience with {topic} may differ depending on what you use it for, so I have tried to show a range of tasks.",
        "If the {topic} team fixes the issues I mentioned, I will happily revisit this review in a follow-up.",
    ],
    call_to_action: "Have you tried it? Share your experience below, and subscribe for more honest reviews.",
};

pub(crate) fn template(category: Category) -> &'static CategoryTemplate {
    match category {
        Category::Tutorial => &TUTORIAL,
        Category::News => &NEWS,
        Category::Comparison => &COMPARISON,
        Category::Explanation => &EXPLANATION,
        Category::Prediction => &PREDICTION,
        Category::Review => &REVIEW,
    }
}

/// Replace every `{key}` in `template` with its value.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_full_material() {
        for category in Category::ALL {
            let t = template(category);
            assert_eq!(t.titles.len(), 5, "{category}");
            assert!(!t.thumbnails.is_empty(), "{category}");
            assert_eq!(t.points.len(), 6, "{category}");
            assert!(!t.elaborations.is_empty(), "{category}");
            assert!(!t.hashtags.is_empty(), "{category}");
        }
    }

    #[test]
    fn comparison_titles_all_need_a_rival() {
        assert!(template(Category::Comparison)
            .titles
            .iter()
            .all(|t| t.contains("{rival}")));
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        let out = fill("{topic} and {topic} vs {rival}", &[("topic", "AI"), ("rival", "ML")]);
        assert_eq!(out, "AI and AI vs ML");
    }

    #[test]
    fn fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{title}!", &[("topic", "AI")]), "{title}!");
    }
}
