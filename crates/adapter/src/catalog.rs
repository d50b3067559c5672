// 内置英文目录；键未命中时原样返回，由上层决定如何显示
pub fn translate(key: &str) -> &str {
    match key {
        "message.addComment.error.title" => "Comment not saved",
        "message.addComment.error.text" => {
            "Your comment could not be saved. Please check the required fields and try again."
        }
        "message.addComment.moderation.title" => "Comment awaiting approval",
        "message.addComment.moderation.text" => {
            "Thank you! Your comment will become visible once it has been approved."
        }
        "message.addComment.success.title" => "Comment saved",
        "message.addComment.success.text" => "Thank you! Your comment has been published.",
        other => other,
    }
}
