mod cart;
mod checkout;
mod course;
mod enrollment;
mod event;
mod quiz;
mod review;

pub use cart::{CartItem, NewCartItem};
pub use checkout::{CheckoutItem, CheckoutRequest, CheckoutSessionCreated};
pub use course::{Course, CourseCreated, CourseDetail, CourseUpdate, InstructorRef, NewCourse};
pub use enrollment::{EnrolledCourse, EnrollmentStatus};
pub use event::{CheckoutMetadata, CheckoutSession, PaymentEvent, CHECKOUT_COMPLETED};
pub use quiz::{
    NewQuizOption, NewQuizQuestion, NewQuizScore, Quiz, QuizOption, QuizOptionUpdate,
    QuizQuestion, QuizQuestionUpdate, QuizScoreUpdate, UserQuizScore,
};
pub use review::{CourseReview, InstructorReview, NewReview, ReviewCreated, ReviewUpdate};
