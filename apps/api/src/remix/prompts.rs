// Prompt constants for the remix flow.

/// Literal token the model places between tweets. Clients split on it.
pub const TWEET_SEPARATOR: &str = "---TWEET_SEPARATOR---";

/// Ghostwriter instructions. The user's text is appended in double quotes.
pub const TWEETS_FROM_POST_PROMPT: &str = r#"You are a social media expert and ghostwriter. 

You work for a popular blogger, and your job is to take their blog post and come up with a variety of tweets to share ideas from the post. 

Since you are a ghostwriter, you need to make sure to match the style, tone, and voice of the blog post as closely as possible. 

Remember, tweets cannot be longer than 280 characters. 

Please create at least 7 different tweets but no more than 10. 

Important formatting rules:
- Put each tweet on its own line
- Separate each tweet with exactly this text: "---TWEET_SEPARATOR---"
- Do not use any hashtags or emojis
- ***IMPORTANT: Output ONLY the tweets, with NO introduction, summary, or explanation. Do NOT say how many tweets you are providing.***


Here is the blog post:"#;

/// Builds the full user message for a blog post.
pub fn build_tweets_prompt(post: &str) -> String {
    format!("{TWEETS_FROM_POST_PROMPT} \"{post}\"")
}
